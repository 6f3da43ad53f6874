//! Repository trait for portfolio projects.

use crate::domain::entities::{Project, ProjectCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Optional filters for project listings. Empty filter matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub category: Option<ProjectCategory>,
    pub featured: Option<bool>,
}

impl ProjectFilter {
    /// Returns true if the project passes every set filter.
    pub fn matches(&self, project: &Project) -> bool {
        self.category.is_none_or(|c| project.category == c)
            && self.featured.is_none_or(|f| project.featured == f)
    }
}

/// Repository interface for portfolio projects.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryProjectRepository`] - process-lifetime store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a project. Listing order is insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a project with the same id exists.
    async fn insert(&self, project: Project) -> Result<Project, AppError>;

    /// Finds a project by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, AppError>;

    /// Lists projects matching `filter`, in insertion order.
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, AppError>;
}
