//! Deferred schema migration.
//!
//! The server may start before PostgreSQL is reachable. Migrations are then
//! applied by whichever storage call first gets a connection, and exactly
//! once per process.

use sqlx::migrate::MigrateError;
use tokio::sync::OnceCell;

use crate::DbPool;

/// Tracks whether this process has brought the schema up to date.
#[derive(Debug, Default)]
pub struct SchemaGate {
    migrated: OnceCell<()>,
}

impl SchemaGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply pending migrations unless a previous call already succeeded.
    ///
    /// A failed attempt leaves the gate closed so the next call retries.
    /// Concurrent callers wait on the same attempt.
    pub async fn ensure(&self, pool: &DbPool) -> Result<(), MigrateError> {
        self.migrated
            .get_or_try_init(|| async {
                crate::run_migrations(pool).await?;
                tracing::info!("Database migrations applied");
                Ok::<(), MigrateError>(())
            })
            .await
            .map(|_| ())
    }

    /// Whether migrations have been applied by this process.
    pub fn is_ready(&self) -> bool {
        self.migrated.initialized()
    }
}
