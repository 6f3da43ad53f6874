//! Portfolio projects seeded at startup.

use crate::domain::entities::{NewProject, ProjectCategory};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Projects loaded into the store when the server starts.
pub fn seed_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "E-Commerce Platform".to_string(),
            client: "RetailCo Global".to_string(),
            category: ProjectCategory::Ecommerce,
            description: "Modern e-commerce solution with seamless checkout, inventory management, and payment integration for a leading international retail brand.".to_string(),
            image_url: "/assets/ecommerce.png".to_string(),
            tags: tags(&["React", "Node.js", "Stripe", "MongoDB"]),
            featured: true,
        },
        NewProject {
            title: "Mobile Banking Application".to_string(),
            client: "FinanceHub Africa".to_string(),
            category: ProjectCategory::Mobile,
            description: "Secure mobile banking platform with real-time transactions, account management, and advanced security features.".to_string(),
            image_url: "/assets/banking.png".to_string(),
            tags: tags(&["React Native", "Firebase", "Security"]),
            featured: true,
        },
        NewProject {
            title: "Restaurant Booking System".to_string(),
            client: "DineEasy Group".to_string(),
            category: ProjectCategory::Web,
            description: "Streamlined reservation system with table management, menu integration, and customer analytics.".to_string(),
            image_url: "/assets/restaurant.png".to_string(),
            tags: tags(&["Vue.js", "Express", "PostgreSQL"]),
            featured: true,
        },
    ]
}
