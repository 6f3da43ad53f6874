//! DTOs for portfolio project endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::{Project, ProjectCategory};
use crate::domain::repositories::ProjectFilter;

/// A project as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub client: String,
    pub category: ProjectCategory,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub featured: bool,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            client: p.client,
            category: p.category,
            description: p.description,
            image_url: p.image_url,
            tags: p.tags,
            featured: p.featured,
        }
    }
}

/// Query parameters for `GET /api/projects`.
///
/// Uses `serde_with` to parse `featured` from the query string.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    #[serde(default)]
    pub category: Option<ProjectCategory>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub featured: Option<bool>,
}

impl From<ProjectListParams> for ProjectFilter {
    fn from(params: ProjectListParams) -> Self {
        ProjectFilter {
            category: params.category,
            featured: params.featured,
        }
    }
}
