//! Pricing package entity.

use serde::{Deserialize, Serialize};

/// Grouping used on the pricing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageCategory {
    Consultation,
    Website,
    Software,
    Additional,
}

/// A package from the static pricing catalog.
///
/// `price` is a display string ("Free", "$2,500", "Custom Quote"), never
/// parsed. Packages are defined at build time and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingPackage {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub features: Vec<String>,
    pub featured: bool,
    pub category: PackageCategory,
}

impl PricingPackage {
    /// Whether the price is a fixed one-time amount rather than a label
    /// like "Free" or "Custom Quote".
    pub fn is_fixed_price(&self) -> bool {
        !matches!(self.price.as_str(), "Free" | "Custom Quote" | "Variable")
    }
}
