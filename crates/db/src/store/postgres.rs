use async_trait::async_trait;
use projecthub_core::types::ProjectId;

use super::{ProjectStore, StoreError};
use crate::models::project::{NewProject, Project, ProjectChanges};
use crate::repositories::ProjectRepo;
use crate::DbPool;

/// [`ProjectStore`] backed by the `projects` table.
#[derive(Clone)]
pub struct PgProjectStore {
    pool: DbPool,
}

impl PgProjectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn create(&self, project: NewProject) -> Result<Project, StoreError> {
        Ok(ProjectRepo::create(&self.pool, &project).await?)
    }

    async fn list_for(&self, user: &str) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::list_for_member(&self.pool, user).await?)
    }

    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update_by_id(
        &self,
        id: ProjectId,
        changes: ProjectChanges,
    ) -> Result<Option<Project>, StoreError> {
        let updated = ProjectRepo::update(&self.pool, id, &changes).await?;
        if updated.is_none() {
            tracing::debug!(project_id = %id, "Update matched no project row");
        }
        Ok(updated)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
