//! In-memory implementation of the project repository.

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::Project;
use crate::domain::repositories::{ProjectFilter, ProjectRepository};
use crate::error::AppError;

/// Process-lifetime project store.
///
/// Projects are kept in a `Vec` so listings come back in insertion order;
/// the catalog is small enough that lookups by id scan linearly.
#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: RwLock<Vec<Project>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn insert(&self, project: Project) -> Result<Project, AppError> {
        let mut projects = self.projects.write().await;

        if projects.iter().any(|p| p.id == project.id) {
            return Err(AppError::conflict(
                "Project already exists",
                json!({ "id": project.id }),
            ));
        }

        projects.push(project.clone());
        Ok(project)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        let projects = self.projects.read().await;
        Ok(projects.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, AppError> {
        let projects = self.projects.read().await;
        Ok(projects
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }
}
