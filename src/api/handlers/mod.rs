//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod contact;
pub mod health;
pub mod pricing;
pub mod projects;

pub use contact::{list_submissions_handler, submit_contact_handler};
pub use health::health_handler;
pub use pricing::{
    create_share_link_handler, get_package_handler, list_packages_handler,
    resolve_share_link_handler,
};
pub use projects::{get_project_handler, list_projects_handler};
