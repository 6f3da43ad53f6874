//! Static pricing package catalog.

use crate::domain::entities::{PackageCategory, PricingPackage};

struct PackageDef {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    featured: bool,
    category: PackageCategory,
}

const PACKAGES: &[PackageDef] = &[
    PackageDef {
        id: "free-consultation",
        name: "Free Consultation",
        description: "A 30-minute call to scope your project and get a no-obligation quote.",
        price: "Free",
        features: &[
            "30-minute video call",
            "Requirements discussion",
            "Technology recommendations",
            "Timeline estimation",
            "No-obligation quote",
        ],
        featured: false,
        category: PackageCategory::Consultation,
    },
    PackageDef {
        id: "basic-website",
        name: "Basic Website",
        description: "A fast, responsive site for small businesses getting online.",
        price: "$2,500",
        features: &[
            "Up to 5 pages",
            "Responsive design",
            "Contact form",
            "Basic SEO setup",
            "3 months of support",
        ],
        featured: false,
        category: PackageCategory::Website,
    },
    PackageDef {
        id: "professional-website",
        name: "Professional Website",
        description: "A content-managed marketing site built to convert.",
        price: "$5,000",
        features: &[
            "Up to 15 pages",
            "Custom design system",
            "CMS integration",
            "Analytics and SEO optimization",
            "Performance tuning",
            "6 months of support",
        ],
        featured: true,
        category: PackageCategory::Website,
    },
    PackageDef {
        id: "ecommerce-website",
        name: "E-Commerce Website",
        description: "An online store with payments, inventory, and order management.",
        price: "$8,500",
        features: &[
            "Product catalog and search",
            "Payment gateway integration",
            "Inventory management",
            "Order tracking emails",
            "6 months of support",
        ],
        featured: false,
        category: PackageCategory::Website,
    },
    PackageDef {
        id: "custom-software",
        name: "Custom Software",
        description: "Bespoke web platforms, internal tools, and integrations.",
        price: "Custom Quote",
        features: &[
            "Discovery and architecture workshop",
            "Dedicated project manager",
            "Agile delivery in two-week sprints",
            "Automated testing and CI/CD",
            "12 months of support",
        ],
        featured: false,
        category: PackageCategory::Software,
    },
    PackageDef {
        id: "maintenance-support",
        name: "Maintenance & Support",
        description: "Ongoing updates, monitoring, and security patches after launch.",
        price: "Variable",
        features: &[
            "Security updates",
            "Uptime monitoring",
            "Monthly backups",
            "Priority bug fixes",
        ],
        featured: false,
        category: PackageCategory::Additional,
    },
];

/// Returns the pricing catalog in display order.
pub fn pricing_packages() -> Vec<PricingPackage> {
    PACKAGES
        .iter()
        .map(|def| PricingPackage {
            id: def.id.to_string(),
            name: def.name.to_string(),
            description: def.description.to_string(),
            price: def.price.to_string(),
            features: def.features.iter().map(|f| f.to_string()).collect(),
            featured: def.featured,
            category: def.category,
        })
        .collect()
}
