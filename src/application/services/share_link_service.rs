//! Shareable pricing link generation and resolution.

use std::sync::Arc;

use crate::application::services::PricingService;
use crate::domain::entities::{NewShareableLink, ShareableLink};
use crate::domain::repositories::ShareLinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use serde_json::json;
use tracing::{debug, info, warn};

/// Attempts at finding a free code before giving up.
const MAX_ATTEMPTS: usize = 10;

/// Service that issues share links for pricing packages and counts views.
///
/// Package ids are checked against the catalog at creation time only; a
/// link keeps pointing at its package id for its whole lifetime.
pub struct ShareLinkService<R: ShareLinkRepository> {
    repository: Arc<R>,
    pricing: Arc<PricingService>,
    code_length: usize,
}

impl<R: ShareLinkRepository> ShareLinkService<R> {
    /// Creates a new share link service issuing codes of `code_length` hex characters.
    pub fn new(repository: Arc<R>, pricing: Arc<PricingService>, code_length: usize) -> Self {
        Self {
            repository,
            pricing,
            code_length,
        }
    }

    /// Issues a new link for a catalog package.
    ///
    /// The returned link has zero views and the current timestamp. On a code
    /// collision a fresh code is drawn, up to 10 attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `package_id` is not in the catalog.
    /// Returns [`AppError::Internal`] if no free code was found or the random
    /// source failed.
    pub async fn create_link(&self, package_id: &str) -> Result<ShareableLink, AppError> {
        if !self.pricing.contains(package_id) {
            return Err(AppError::bad_request(
                "Unknown pricing package",
                json!({ "packageId": package_id }),
            ));
        }

        for attempt in 1..=MAX_ATTEMPTS {
            let new_link = NewShareableLink {
                id: generate_code(self.code_length)?,
                package_id: package_id.to_string(),
            };

            match self.repository.create(new_link).await {
                Ok(link) => {
                    metrics::counter!("share_links_created_total").increment(1);
                    info!(link_id = %link.id, package_id, "Share link created");
                    return Ok(link);
                }
                Err(AppError::Conflict { details, .. }) => {
                    warn!(attempt, %details, "Share code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique share code",
            json!({ "reason": "Too many collisions", "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Resolves a link and counts the view.
    ///
    /// The returned link already includes this view.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn resolve_link(&self, id: &str) -> Result<ShareableLink, AppError> {
        let link = self.repository.resolve(id).await?.ok_or_else(|| {
            AppError::not_found("Shareable link not found", json!({ "id": id }))
        })?;

        metrics::counter!("share_links_resolved_total").increment(1);
        debug!(link_id = %link.id, views = link.view_count, "Share link resolved");

        Ok(link)
    }

    /// Number of links issued since startup.
    pub async fn link_count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
