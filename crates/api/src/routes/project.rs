//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{project_id}                      -> get_by_id
/// POST   /{project_id}/link-order           -> link_order
/// GET    /by-order/{presta_order_id}        -> get_by_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{project_id}", get(project::get_by_id))
        .route("/{project_id}/link-order", post(project::link_order))
        .route("/by-order/{presta_order_id}", get(project::get_by_order))
}
