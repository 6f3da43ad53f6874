//! # Agency API
//!
//! Backend for a software agency's marketing site, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory stores and static catalog
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Portfolio project listing with category/featured filters
//! - Contact form intake with field-level validation
//! - Pricing catalog
//! - Shareable pricing links with view counting
//!
//! All data lives in process memory and is lost on restart.
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"                       # Optional
//! export PUBLIC_BASE_URL="https://agency.example"      # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ContactService, PricingService, ProjectService, ShareLinkService,
    };
    pub use crate::domain::entities::{
        ContactSubmission, PricingPackage, Project, ShareableLink,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
