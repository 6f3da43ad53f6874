//! Contact form submission entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service a prospect is asking about.
///
/// Covers the broad form options plus the individual service offerings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceInterest {
    Consultation,
    Website,
    Software,
    WebEngineering,
    ProductPlatforms,
    MobileExperiences,
    DataAutomation,
    ExperienceStrategy,
    Other,
}

/// A stored contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_interest: ServiceInterest,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// Validated form input, before an id and timestamp are assigned.
#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_interest: ServiceInterest,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_interest_kebab_case() {
        assert_eq!(
            serde_json::to_value(ServiceInterest::WebEngineering).unwrap(),
            "web-engineering"
        );
        let parsed: ServiceInterest = serde_json::from_str("\"consultation\"").unwrap();
        assert_eq!(parsed, ServiceInterest::Consultation);
    }

    #[test]
    fn test_unknown_service_interest_rejected() {
        let parsed = serde_json::from_str::<ServiceInterest>("\"gardening\"");
        assert!(parsed.is_err());
    }
}
