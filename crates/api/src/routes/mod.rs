pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                 list (GET), create (POST)
/// /projects/{id}            update (PUT)
/// ```
///
/// Every route requires a session token (`Authorization: Bearer` or the
/// `session_token` cookie).
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
