//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::project_service::ProjectService`] - Portfolio listing and lookup
//! - [`services::contact_service::ContactService`] - Contact form intake
//! - [`services::pricing_service::PricingService`] - Pricing catalog lookups
//! - [`services::share_link_service::ShareLinkService`] - Share link generation and resolution

pub mod services;
