//! Repository trait for shareable pricing links.

use crate::domain::entities::{NewShareableLink, ShareableLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Link store: opaque id to {package, creation time, view count}.
///
/// Implementations must make [`ShareLinkRepository::create`] an
/// insert-if-vacant and [`ShareLinkRepository::resolve`] a single
/// read-increment-write, so that concurrent calls neither overwrite links nor
/// lose views.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryShareLinkRepository`] - process-lifetime store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShareLinkRepository: Send + Sync {
    /// Registers a new link with zero views and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id is already taken.
    async fn create(&self, new_link: NewShareableLink) -> Result<ShareableLink, AppError>;

    /// Looks up a link and counts one view.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(link))` with `view_count` already incremented
    /// - `Ok(None)` if no link has this id (nothing is recorded)
    async fn resolve(&self, id: &str) -> Result<Option<ShareableLink>, AppError>;

    /// Number of stored links.
    async fn count(&self) -> Result<usize, AppError>;
}
