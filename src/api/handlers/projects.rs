//! Handlers for portfolio project endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::project::{ProjectListParams, ProjectResponse};
use crate::api::extract::AppQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Lists portfolio projects.
///
/// # Endpoint
///
/// `GET /api/projects`
///
/// # Query Parameters
///
/// - `category` - Optional: `web`, `software`, `mobile`, `ecommerce`, or `saas`
/// - `featured` - Optional: `true` or `false`
///
/// # Errors
///
/// Returns 400 if a query parameter has an unknown value.
pub async fn list_projects_handler(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ProjectListParams>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let projects = state.project_service.list_projects(params.into()).await?;

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// Retrieves a single project.
///
/// # Endpoint
///
/// `GET /api/projects/{id}`
///
/// # Errors
///
/// Returns 404 if no project has this id.
pub async fn get_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = state.project_service.get_project(&id).await?;

    Ok(Json(project.into()))
}
