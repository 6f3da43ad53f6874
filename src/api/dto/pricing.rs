//! DTOs for pricing catalog and share link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{PackageCategory, PricingPackage, ShareableLink};

/// A catalog package as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPackageResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub features: Vec<String>,
    pub featured: bool,
    pub category: PackageCategory,
}

impl From<&PricingPackage> for PricingPackageResponse {
    fn from(p: &PricingPackage) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            price: p.price.clone(),
            features: p.features.clone(),
            featured: p.featured,
            category: p.category,
        }
    }
}

/// Body for `POST /api/pricing/share`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinkRequest {
    #[validate(length(min = 1, message = "Package id is required"))]
    pub package_id: String,
}

/// Response for a newly issued link.
#[derive(Debug, Serialize)]
pub struct ShareLinkCreatedResponse {
    pub success: bool,
    pub link: ShareLinkSummary,
}

/// Public view of a new link, including its shareable URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinkSummary {
    pub id: String,
    pub package_id: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// A resolved link, view count included.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareableLinkResponse {
    pub id: String,
    pub package_id: String,
    pub created_at: DateTime<Utc>,
    pub view_count: u64,
}

impl From<ShareableLink> for ShareableLinkResponse {
    fn from(link: ShareableLink) -> Self {
        Self {
            id: link.id,
            package_id: link.package_id,
            created_at: link.created_at,
            view_count: link.view_count,
        }
    }
}
