//! Contact form intake.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::{ContactSubmission, NewContactSubmission};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// Service that records contact form submissions.
///
/// Input is expected to be validated by the API layer already.
pub struct ContactService<R: ContactRepository> {
    repository: Arc<R>,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a new contact service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a submission with a fresh UUID and the current timestamp.
    pub async fn submit(&self, input: NewContactSubmission) -> Result<ContactSubmission, AppError> {
        let submission = ContactSubmission {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            service_interest: input.service_interest,
            message: input.message,
            submitted_at: Utc::now(),
        };

        let stored = self.repository.insert(submission).await?;

        metrics::counter!("contact_submissions_total").increment(1);
        info!(submission_id = %stored.id, service_interest = ?stored.service_interest, "Contact form submitted");

        Ok(stored)
    }

    /// Every submission received since startup.
    pub async fn list_submissions(&self) -> Result<Vec<ContactSubmission>, AppError> {
        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ServiceInterest;
    use crate::domain::repositories::MockContactRepository;

    #[tokio::test]
    async fn test_submit_assigns_id_and_timestamp() {
        let mut mock_repo = MockContactRepository::new();
        mock_repo
            .expect_insert()
            .withf(|s| s.email == "ada@example.com" && s.phone.as_deref() == Some("+254700000000"))
            .times(1)
            .returning(|s| Ok(s));

        let service = ContactService::new(Arc::new(mock_repo));
        let before = Utc::now();
        let submission = service
            .submit(NewContactSubmission {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: Some("+254700000000".to_string()),
                service_interest: ServiceInterest::Software,
                message: "We need an internal dashboard".to_string(),
            })
            .await
            .unwrap();

        assert!(Uuid::parse_str(&submission.id).is_ok());
        assert!(submission.submitted_at >= before);
        assert_eq!(submission.service_interest, ServiceInterest::Software);
    }

    #[tokio::test]
    async fn test_list_submissions_delegates() {
        let mut mock_repo = MockContactRepository::new();
        mock_repo.expect_list().times(1).returning(|| Ok(vec![]));

        let service = ContactService::new(Arc::new(mock_repo));
        assert!(service.list_submissions().await.unwrap().is_empty());
    }
}
