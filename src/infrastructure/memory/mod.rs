//! Process-lifetime repository implementations.
//!
//! Each store owns a `tokio::sync::RwLock` around its collection. Data lives
//! until the process exits; swapping in a durable backend only requires new
//! implementations of the [`crate::domain::repositories`] traits.
//!
//! # Repositories
//!
//! - [`InMemoryProjectRepository`] - Portfolio projects, insertion-ordered
//! - [`InMemoryContactRepository`] - Contact submissions, append-only
//! - [`InMemoryShareLinkRepository`] - Share links keyed by opaque id

pub mod contact_repository;
pub mod project_repository;
pub mod share_link_repository;

pub use contact_repository::InMemoryContactRepository;
pub use project_repository::InMemoryProjectRepository;
pub use share_link_repository::InMemoryShareLinkRepository;
