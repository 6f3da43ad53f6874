//! API route configuration.

use crate::api::handlers::{
    create_share_link_handler, get_package_handler, get_project_handler, list_packages_handler,
    list_projects_handler, list_submissions_handler, resolve_share_link_handler,
    submit_contact_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `GET  /projects`                - List portfolio projects (filterable)
/// - `GET  /projects/{id}`           - Single project
/// - `POST /contact`                 - Submit the contact form
/// - `GET  /contact/submissions`     - List contact submissions
/// - `GET  /pricing/packages`        - Pricing catalog
/// - `GET  /pricing/packages/{id}`   - Single pricing package
/// - `POST /pricing/share`           - Issue a shareable link for a package
/// - `GET  /pricing/share/{id}`      - Resolve a shareable link (counts a view)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects_handler))
        .route("/projects/{id}", get(get_project_handler))
        .route("/contact", post(submit_contact_handler))
        .route("/contact/submissions", get(list_submissions_handler))
        .route("/pricing/packages", get(list_packages_handler))
        .route("/pricing/packages/{id}", get(get_package_handler))
        .route("/pricing/share", post(create_share_link_handler))
        .route("/pricing/share/{id}", get(resolve_share_link_handler))
}
