//! The project store port.
//!
//! Handlers receive an `Arc<dyn ProjectStore>` through application state, so
//! the HTTP layer never resolves a connection on its own. Two adapters exist:
//!
//! - [`PgProjectStore`] -- PostgreSQL via [`ProjectRepo`](crate::repositories::ProjectRepo).
//! - [`InMemoryProjectStore`] -- process-local, for tests and local runs.

mod memory;
mod postgres;

use async_trait::async_trait;
use projecthub_core::types::ProjectId;

use crate::models::project::{NewProject, Project, ProjectChanges};

pub use memory::InMemoryProjectStore;
pub use postgres::PgProjectStore;

/// Failure inside a store adapter. Never shown to API clients.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Persist a validated project and return the stored document.
    async fn create(&self, project: NewProject) -> Result<Project, StoreError>;

    /// Projects the user created or is a team member of.
    async fn list_for(&self, user: &str) -> Result<Vec<Project>, StoreError>;

    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, StoreError>;

    /// Merge `changes` into the project. `Ok(None)` when no project has `id`;
    /// never creates a document.
    async fn update_by_id(
        &self,
        id: ProjectId,
        changes: ProjectChanges,
    ) -> Result<Option<Project>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
