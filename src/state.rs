//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    ContactService, PricingService, ProjectService, ShareLinkService,
};
use crate::error::AppError;
use crate::infrastructure::catalog::{pricing_packages, seed_projects};
use crate::infrastructure::memory::{
    InMemoryContactRepository, InMemoryProjectRepository, InMemoryShareLinkRepository,
};

/// Services and settings shared by all handlers.
///
/// Cheap to clone: every service sits behind an `Arc`. Stores are created
/// once per state, so each call to [`AppState::in_memory`] yields an
/// independent set of data.
#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<ProjectService<InMemoryProjectRepository>>,
    pub contact_service: Arc<ContactService<InMemoryContactRepository>>,
    pub pricing_service: Arc<PricingService>,
    pub share_link_service: Arc<ShareLinkService<InMemoryShareLinkRepository>>,
    /// Base for share URLs. `None` derives it from each request.
    pub public_base_url: Option<String>,
}

impl AppState {
    /// Builds fresh in-memory stores, loads the pricing catalog, and seeds
    /// the portfolio.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if seeding produces a duplicate project id.
    pub async fn in_memory(
        share_code_length: usize,
        public_base_url: Option<String>,
    ) -> Result<Self, AppError> {
        let pricing_service = Arc::new(PricingService::new(pricing_packages()));

        let project_service = Arc::new(ProjectService::new(Arc::new(
            InMemoryProjectRepository::new(),
        )));
        for project in seed_projects() {
            project_service.create_project(project).await?;
        }

        let contact_service = Arc::new(ContactService::new(Arc::new(
            InMemoryContactRepository::new(),
        )));

        let share_link_service = Arc::new(ShareLinkService::new(
            Arc::new(InMemoryShareLinkRepository::new()),
            pricing_service.clone(),
            share_code_length,
        ));

        Ok(Self {
            project_service,
            contact_service,
            pricing_service,
            share_link_service,
            public_base_url,
        })
    }
}
