//! Core domain entities.
//!
//! Plain data structures without storage concerns. Serialization shapes live
//! in [`crate::api::dto`]; only the closed enums derive serde here so the DTOs
//! can reuse them.
//!
//! # Entity Types
//!
//! - [`Project`] - A portfolio entry
//! - [`PricingPackage`] - A package from the static pricing catalog
//! - [`ContactSubmission`] - A stored contact form submission
//! - [`ShareableLink`] - An opaque link to a pricing package with a view counter
//!
//! Creation inputs follow the `NewX` pattern: `NewProject`,
//! `NewContactSubmission`, `NewShareableLink`.

pub mod contact;
pub mod pricing_package;
pub mod project;
pub mod share_link;

pub use contact::{ContactSubmission, NewContactSubmission, ServiceInterest};
pub use pricing_package::{PackageCategory, PricingPackage};
pub use project::{NewProject, Project, ProjectCategory};
pub use share_link::{NewShareableLink, ShareableLink};
