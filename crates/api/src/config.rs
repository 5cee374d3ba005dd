use std::str::FromStr;
use std::time::Duration;

use rashguard_core::project::{ProjectDefaults, DEFAULT_PROJECT_NAME, DEFAULT_USER_ID};
use rashguard_db::PoolSettings;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Pool size and acquire timeout.
    pub pool: PoolSettings,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Values substituted for a missing `userId` / `projectName`.
    pub project_defaults: ProjectDefaults,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                                        |
    /// |---------------------------|------------------------------------------------|
    /// | `HOST`                    | `0.0.0.0`                                      |
    /// | `PORT`                    | `3000`                                         |
    /// | `DATABASE_URL`            | `postgres://localhost:5432/rashguard_designer` |
    /// | `DB_MAX_CONNECTIONS`      | `10`                                           |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                                            |
    /// | `CORS_ORIGINS`            | `http://localhost:5173,http://localhost:8080`  |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                                           |
    /// | `DEFAULT_USER_ID`         | `placeholder_user`                             |
    /// | `DEFAULT_PROJECT_NAME`    | `Unnamed Project`                              |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Panics on unparseable numeric values; misconfiguration should stop
    /// the process at startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let number = |key: &str, default: &str| -> u64 { parse_or_panic(key, &text(key, default)) };

        let host = text("HOST", "0.0.0.0");
        let port: u16 = parse_or_panic("PORT", &text("PORT", "3000"));
        let database_url = text(
            "DATABASE_URL",
            "postgres://localhost:5432/rashguard_designer",
        );

        let pool = PoolSettings {
            max_connections: parse_or_panic(
                "DB_MAX_CONNECTIONS",
                &text("DB_MAX_CONNECTIONS", "10"),
            ),
            acquire_timeout: Duration::from_secs(number("DB_ACQUIRE_TIMEOUT_SECS", "5")),
        };

        let cors_origins: Vec<String> = text(
            "CORS_ORIGINS",
            "http://localhost:5173,http://localhost:8080",
        )
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

        let request_timeout_secs = number("REQUEST_TIMEOUT_SECS", "30");

        let project_defaults = ProjectDefaults {
            user_id: text("DEFAULT_USER_ID", DEFAULT_USER_ID),
            project_name: text("DEFAULT_PROJECT_NAME", DEFAULT_PROJECT_NAME),
        };

        Self {
            host,
            port,
            database_url,
            pool,
            cors_origins,
            request_timeout_secs,
            project_defaults,
        }
    }
}

fn parse_or_panic<T: FromStr>(key: &str, raw: &str) -> T {
    raw.parse()
        .unwrap_or_else(|_| panic!("{key} must be a valid {}", std::any::type_name::<T>()))
}
