//! DTOs for the contact form endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{ContactSubmission, NewContactSubmission, ServiceInterest};

/// Contact form body for `POST /api/contact`.
///
/// `serviceInterest` is checked during deserialization; unknown values are
/// rejected before validation runs.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    pub service_interest: ServiceInterest,

    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl From<ContactRequest> for NewContactSubmission {
    fn from(req: ContactRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            service_interest: req.service_interest,
            message: req.message,
        }
    }
}

/// Response for a stored submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCreatedResponse {
    pub success: bool,
    pub message: String,
    pub submission_id: String,
}

/// A stored submission as returned by `GET /api/contact/submissions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmissionResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service_interest: ServiceInterest,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<ContactSubmission> for ContactSubmissionResponse {
    fn from(s: ContactSubmission) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
            phone: s.phone,
            service_interest: s.service_interest,
            message: s.message,
            submitted_at: s.submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> ContactRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let req = request(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "serviceInterest": "website",
            "message": "We need a new marketing site"
        }));

        assert!(req.validate().is_ok());
        assert!(req.phone.is_none());
    }

    #[test]
    fn test_short_name_rejected() {
        let req = request(json!({
            "name": "A",
            "email": "ada@example.com",
            "serviceInterest": "other",
            "message": "We need a new marketing site"
        }));

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let req = request(json!({
            "name": "Ada",
            "email": "not-an-email",
            "serviceInterest": "other",
            "message": "We need a new marketing site"
        }));

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_short_message_rejected() {
        let req = request(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "serviceInterest": "consultation",
            "message": "Hi there"
        }));

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }

    #[test]
    fn test_unknown_service_interest_fails_deserialization() {
        let result = serde_json::from_value::<ContactRequest>(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "serviceInterest": "gardening",
            "message": "We need a new marketing site"
        }));

        assert!(result.is_err());
    }
}
