//! Repository trait for contact form submissions.

use crate::domain::entities::ContactSubmission;
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only store of contact submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Stores a submission.
    async fn insert(&self, submission: ContactSubmission) -> Result<ContactSubmission, AppError>;

    /// Returns every submission in the order received.
    async fn list(&self) -> Result<Vec<ContactSubmission>, AppError>;
}
