use rashguard_core::project::NewProjectSubmission;
use rashguard_core::types::{ProjectId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub user_id: String,
    pub project_name: String,
    /// The design exactly as the client submitted it.
    pub config_data: serde_json::Value,
    pub created_at: Timestamp,
    pub presta_order_id: Option<String>,
}

/// DTO for inserting a new project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub user_id: String,
    pub project_name: String,
    pub config_data: serde_json::Value,
}

impl From<NewProjectSubmission> for CreateProject {
    fn from(submission: NewProjectSubmission) -> Self {
        Self {
            user_id: submission.user_id,
            project_name: submission.project_name,
            config_data: submission.config_data.into_value(),
        }
    }
}
