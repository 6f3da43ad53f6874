//! Portfolio project entity.

use serde::{Deserialize, Serialize};

/// Kind of work a portfolio project showcases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Software,
    Mobile,
    Ecommerce,
    Saas,
}

/// A portfolio entry shown on the work pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub client: String,
    pub category: ProjectCategory,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub featured: bool,
}

impl Project {
    /// Builds a stored project from creation input and an assigned id.
    pub fn from_new(id: String, new_project: NewProject) -> Self {
        Self {
            id,
            title: new_project.title,
            client: new_project.client,
            category: new_project.category,
            description: new_project.description,
            image_url: new_project.image_url,
            tags: new_project.tags,
            featured: new_project.featured,
        }
    }
}

/// Input data for creating a new project. The id is assigned by the service.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub client: String,
    pub category: ProjectCategory,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub featured: bool,
}
