//! Project submission rules.
//!
//! A project is a stored design configuration. The design itself is an
//! opaque JSON object: the only thing checked here is that the keys the
//! designer always sends are present and non-null. Element types, colours
//! and views can evolve on the client without touching this crate.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::ProjectId;

/// Keys that must be present and non-null in every submitted design.
pub const REQUIRED_CONFIG_KEYS: [&str; 5] = ["elements", "size", "material", "color", "view"];

/// Default owner recorded when a submission carries no `userId`.
pub const DEFAULT_USER_ID: &str = "placeholder_user";

/// Default name recorded when a submission carries no `projectName`.
pub const DEFAULT_PROJECT_NAME: &str = "Unnamed Project";

/// Values substituted for optional submission fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDefaults {
    pub user_id: String,
    pub project_name: String,
}

impl Default for ProjectDefaults {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            project_name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }
}

/// A design payload that has passed the required-key check.
///
/// The wrapped object is kept exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigData(Map<String, Value>);

impl ConfigData {
    /// Validate a raw payload.
    ///
    /// Fails when the payload is not a JSON object or when any of
    /// [`REQUIRED_CONFIG_KEYS`] is absent or `null`. The error message
    /// names every missing key.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        let Value::Object(map) = value else {
            return Err(CoreError::Validation(
                "Request body must be a JSON object describing the design".to_string(),
            ));
        };

        let missing: Vec<&str> = REQUIRED_CONFIG_KEYS
            .iter()
            .copied()
            .filter(|key| map.get(*key).map_or(true, Value::is_null))
            .collect();

        if !missing.is_empty() {
            return Err(CoreError::Validation(format!(
                "Missing required fields (must be present and non-null): {}",
                missing.join(", ")
            )));
        }

        Ok(Self(map))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// A validated create request, ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProjectSubmission {
    pub user_id: String,
    pub project_name: String,
    pub config_data: ConfigData,
}

impl NewProjectSubmission {
    /// Build a submission from the raw request body.
    ///
    /// The whole body becomes the design payload, `userId` and
    /// `projectName` included. Those two fields fall back to `defaults`
    /// when absent, `null` or empty.
    pub fn from_payload(payload: Value, defaults: &ProjectDefaults) -> Result<Self, CoreError> {
        let config_data = ConfigData::from_value(payload)?;
        let map = config_data.as_map();

        let user_id = optional_text(map, "userId")?.unwrap_or_else(|| defaults.user_id.clone());
        let project_name =
            optional_text(map, "projectName")?.unwrap_or_else(|| defaults.project_name.clone());

        Ok(Self {
            user_id,
            project_name,
            config_data,
        })
    }
}

/// Read an optional scalar field as text.
///
/// Numbers and booleans are stringified. Arrays and objects are rejected.
fn optional_text(map: &Map<String, Value>, field: &str) -> Result<Option<String>, CoreError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(CoreError::Validation(format!("{field} must be a string"))),
    }
}

/// Parse a project id taken from a URL path.
///
/// A malformed id is a validation failure, never "not found".
pub fn parse_project_id(raw: &str) -> Result<ProjectId, CoreError> {
    raw.parse::<ProjectId>()
        .map_err(|_| CoreError::Validation("Invalid project ID format".to_string()))
}

/// Validate the order id supplied when linking a project to an order.
///
/// Strings must be non-empty; numbers (zero included) are accepted and
/// stored as text. Booleans are rejected.
pub fn require_order_id(value: Option<&Value>) -> Result<String, CoreError> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(CoreError::Validation("prestaOrderId is required".to_string())),
    }
}
