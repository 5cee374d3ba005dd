use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}

/// GET /api/ping
async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "API OK" })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}
