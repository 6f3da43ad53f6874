//! Pricing catalog lookups.

use crate::domain::entities::PricingPackage;
use crate::error::AppError;
use serde_json::json;

/// Read-only view over the pricing catalog.
///
/// The catalog is fixed at construction; nothing mutates it afterwards.
pub struct PricingService {
    packages: Vec<PricingPackage>,
}

impl PricingService {
    /// Creates a service over the given packages, kept in display order.
    pub fn new(packages: Vec<PricingPackage>) -> Self {
        Self { packages }
    }

    /// All packages in display order.
    pub fn list_packages(&self) -> &[PricingPackage] {
        &self.packages
    }

    /// Retrieves a package by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no package has this id.
    pub fn get_package(&self, id: &str) -> Result<&PricingPackage, AppError> {
        self.packages
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found("Pricing package not found", json!({ "id": id })))
    }

    /// Whether a package with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.packages.iter().any(|p| p.id == id)
    }
}
