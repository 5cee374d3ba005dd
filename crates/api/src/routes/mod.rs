pub mod health;
pub mod ping;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ping                                           liveness check
///
/// /projects                                       list, create
/// /projects/{project_id}                          get
/// /projects/{project_id}/link-order               link to order (POST)
/// /projects/by-order/{presta_order_id}            get by order
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(ping::router())
        .nest("/projects", project::router())
}
