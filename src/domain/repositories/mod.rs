//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::memory`. Mock implementations are generated via
//! `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`ProjectRepository`] - Portfolio projects
//! - [`ContactRepository`] - Contact form submissions
//! - [`ShareLinkRepository`] - Shareable pricing links and view counts

pub mod contact_repository;
pub mod project_repository;
pub mod share_link_repository;

pub use contact_repository::ContactRepository;
pub use project_repository::{ProjectFilter, ProjectRepository};
pub use share_link_repository::ShareLinkRepository;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
#[cfg(test)]
pub use project_repository::MockProjectRepository;
#[cfg(test)]
pub use share_link_repository::MockShareLinkRepository;
