use std::sync::Arc;

use rashguard_db::{DbPool, SchemaGate};

use crate::config::ServerConfig;
use crate::error::AppResult;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. May be lazily connected if the database
    /// was unreachable at startup.
    pub pool: DbPool,
    /// Whether the schema has been migrated by this process.
    pub schema: Arc<SchemaGate>,
    /// Server configuration (project defaults are read from here).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            schema: Arc::new(SchemaGate::new()),
            config: Arc::new(config),
        }
    }

    /// The pool, once the schema is known to be current.
    ///
    /// The first call after the database becomes reachable applies the
    /// migrations; later calls return immediately.
    pub async fn ready_pool(&self) -> AppResult<&DbPool> {
        self.schema.ensure(&self.pool).await?;
        Ok(&self.pool)
    }
}
