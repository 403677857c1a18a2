use std::sync::Arc;

use projecthub_db::store::ProjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Project persistence, injected at startup (PostgreSQL or in-memory).
    pub store: Arc<dyn ProjectStore>,
    /// Server configuration (session secret, edit guard, timeouts).
    pub config: Arc<ServerConfig>,
}
