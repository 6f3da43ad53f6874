//! Portfolio project service.

use std::sync::Arc;

use crate::domain::entities::{NewProject, Project};
use crate::domain::repositories::{ProjectFilter, ProjectRepository};
use crate::error::AppError;
use serde_json::json;
use uuid::Uuid;

/// Service for listing and retrieving portfolio projects.
pub struct ProjectService<R: ProjectRepository> {
    repository: Arc<R>,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Creates a new project service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists projects matching the filter, in insertion order.
    pub async fn list_projects(&self, filter: ProjectFilter) -> Result<Vec<Project>, AppError> {
        self.repository.list(filter).await
    }

    /// Retrieves a project by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no project has this id.
    pub async fn get_project(&self, id: &str) -> Result<Project, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found", json!({ "id": id })))
    }

    /// Stores a new project under a freshly generated UUID.
    pub async fn create_project(&self, new_project: NewProject) -> Result<Project, AppError> {
        let project = Project::from_new(Uuid::new_v4().to_string(), new_project);
        self.repository.insert(project).await
    }
}
