use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use projecthub_core::access::is_visible_to;
use projecthub_core::types::ProjectId;
use tokio::sync::RwLock;

use super::{ProjectStore, StoreError};
use crate::models::project::{NewProject, Project, ProjectChanges};

/// Process-local [`ProjectStore`] keeping projects in insertion order.
///
/// `set_offline(true)` makes every call fail with
/// [`StoreError::Unavailable`], which lets tests drive the 500 paths.
#[derive(Default)]
pub struct InMemoryProjectStore {
    projects: RwLock<Vec<Project>>,
    offline: AtomicBool,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of stored projects, regardless of visibility.
    pub async fn len(&self) -> usize {
        self.projects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            tracing::debug!("Rejecting call: in-memory store is offline");
            return Err(StoreError::Unavailable("in-memory store is offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn create(&self, project: NewProject) -> Result<Project, StoreError> {
        self.ensure_online()?;
        let now = Utc::now();
        let stored = Project {
            id: ProjectId::now_v7(),
            name: project.name,
            client_name: project.client_name,
            description: project.description,
            technology_stack: project.technology_stack,
            start_date: project.start_date,
            end_date: project.end_date,
            priority: project.priority,
            status: project.status,
            budget: project.budget,
            team_members: project.team_members,
            created_by: project.created_by,
            created_at: now,
            updated_at: now,
        };
        self.projects.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_for(&self, user: &str) -> Result<Vec<Project>, StoreError> {
        self.ensure_online()?;
        let guard = self.projects.read().await;
        Ok(guard
            .iter()
            .filter(|p| is_visible_to(&p.created_by, &p.team_members, user))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, StoreError> {
        self.ensure_online()?;
        let guard = self.projects.read().await;
        Ok(guard.iter().find(|p| p.id == id).cloned())
    }

    async fn update_by_id(
        &self,
        id: ProjectId,
        changes: ProjectChanges,
    ) -> Result<Option<Project>, StoreError> {
        self.ensure_online()?;
        let mut guard = self.projects.write().await;
        let Some(project) = guard.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        changes.apply_to(project);
        project.updated_at = Utc::now();
        Ok(Some(project.clone()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.ensure_online()
    }
}
