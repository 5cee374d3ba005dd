use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Readiness of the service's storage.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when projects can be stored, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// PostgreSQL answered `SELECT 1`.
    pub db_healthy: bool,
    /// The `projects` schema has been migrated by this process.
    pub schema_ready: bool,
}

/// GET /health
///
/// Answers 200 even when degraded; `/api/ping` is the plain liveness check.
/// A reachable database with a pending schema is migrated here, the same
/// way the first project request would do it.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = rashguard_db::health_check(&state.pool).await.is_ok();
    let schema_ready = db_healthy && state.ready_pool().await.is_ok();

    Json(HealthResponse {
        status: if schema_ready { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_ready,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
