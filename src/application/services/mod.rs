//! Business logic services for the application layer.

pub mod contact_service;
pub mod pricing_service;
pub mod project_service;
pub mod share_link_service;

pub use contact_service::ContactService;
pub use pricing_service::PricingService;
pub use project_service::ProjectService;
pub use share_link_service::ShareLinkService;
