//! In-memory implementation of the contact repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::ContactSubmission;
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// Process-lifetime, append-only submission log.
#[derive(Default)]
pub struct InMemoryContactRepository {
    submissions: RwLock<Vec<ContactSubmission>>,
}

impl InMemoryContactRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, submission: ContactSubmission) -> Result<ContactSubmission, AppError> {
        self.submissions.write().await.push(submission.clone());
        Ok(submission)
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>, AppError> {
        Ok(self.submissions.read().await.clone())
    }
}
