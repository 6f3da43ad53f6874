//! CLI administration tool for agency-api.
//!
//! Inspects the build-time catalog and the service configuration without
//! starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # List pricing packages
//! cargo run --bin agency-admin -- packages list
//!
//! # Show one package with its features
//! cargo run --bin agency-admin -- packages show professional-website
//!
//! # List the seed portfolio
//! cargo run --bin agency-admin -- projects list
//!
//! # Validate environment configuration
//! cargo run --bin agency-admin -- config check
//! ```
//!
//! # Features
//!
//! - **Catalog Inspection**: Pricing packages and seed projects
//! - **Config Check**: Same validation the server runs at startup
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use agency_api::application::services::PricingService;
use agency_api::config;
use agency_api::domain::entities::PricingPackage;
use agency_api::infrastructure::catalog::{pricing_packages, seed_projects};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for inspecting agency-api.
#[derive(Parser)]
#[command(name = "agency-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Pricing catalog
    Packages {
        #[command(subcommand)]
        action: PackageAction,
    },

    /// Seed portfolio
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum PackageAction {
    /// List all packages
    List,

    /// Show a single package
    Show {
        /// Package id (e.g., "basic-website")
        id: String,
    },
}

#[derive(Subcommand)]
enum ProjectAction {
    /// List seeded projects
    List,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate configuration from the environment
    Check,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Packages { action } => handle_package_action(action)?,
        Commands::Projects { action } => match action {
            ProjectAction::List => list_projects(),
        },
        Commands::Config { action } => match action {
            ConfigAction::Check => check_config()?,
        },
    }

    Ok(())
}

/// Dispatches pricing catalog commands.
fn handle_package_action(action: PackageAction) -> Result<()> {
    let pricing = PricingService::new(pricing_packages());

    match action {
        PackageAction::List => list_packages(&pricing),
        PackageAction::Show { id } => show_package(&pricing, &id)?,
    }

    Ok(())
}

/// Lists the pricing catalog.
///
/// # Output Format
///
/// ```text
/// 💰 Pricing Packages
///
///   ID                      Name                       Price           Category
///   ──────────────────────────────────────────────────────────────────────────────
///   free-consultation       Free Consultation          Free            consultation
///   professional-website    Professional Website ★     $5,000          website
/// ```
fn list_packages(pricing: &PricingService) {
    println!("{}", "💰 Pricing Packages".bright_blue().bold());
    println!();

    println!(
        "  {:<23} {:<26} {:<15} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Price".bright_white().bold(),
        "Category".bright_white().bold()
    );
    println!("  {}", "─".repeat(78).bright_black());

    for package in pricing.list_packages() {
        let name = if package.featured {
            format!("{} ★", package.name)
        } else {
            package.name.clone()
        };

        println!(
            "  {:<23} {:<26} {:<15} {}",
            package.id.cyan(),
            name,
            package.price.bright_green(),
            category_label(package).bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        pricing.list_packages().len().to_string().bright_white().bold()
    );
    println!();
}

fn show_package(pricing: &PricingService, id: &str) -> Result<()> {
    let package = pricing
        .get_package(id)
        .map_err(|e| anyhow::anyhow!("{}: '{}'", e, id))?;

    println!("{}", package.name.bright_blue().bold());
    println!();
    println!("  ID:       {}", package.id.cyan());
    println!("  Category: {}", category_label(package));

    let price = if package.is_fixed_price() {
        format!("{} (one-time)", package.price)
    } else {
        package.price.clone()
    };
    println!("  Price:    {}", price.bright_green().bold());

    if package.featured {
        println!("  {}", "★ Most popular".yellow());
    }

    println!();
    println!("  {}", package.description);
    println!();

    for feature in &package.features {
        println!("  {} {}", "✓".green(), feature);
    }
    println!();

    Ok(())
}

fn list_projects() {
    println!("{}", "📁 Seed Projects".bright_blue().bold());
    println!();

    let projects = seed_projects();
    for project in &projects {
        let featured = if project.featured {
            "featured".green()
        } else {
            "".normal()
        };

        println!(
            "  {} {} {}",
            project.title.cyan().bold(),
            format!("({})", project.client).bright_black(),
            featured
        );
        println!("    {}", project.tags.join(", ").bright_black());
    }

    println!();
    println!(
        "  Total: {}",
        projects.len().to_string().bright_white().bold()
    );
    println!();
}

/// Runs the same load and validation the server performs at startup.
fn check_config() -> Result<()> {
    println!("{}", "🔍 Checking configuration...".bright_blue());

    let config = config::load_from_env()?;

    println!();
    println!("  Listen address:    {}", config.listen_addr.bright_white());
    println!(
        "  Public base URL:   {}",
        config
            .public_base_url
            .as_deref()
            .unwrap_or("(derived from requests)")
            .bright_white()
    );
    println!(
        "  Share code length: {}",
        config.share_code_length.to_string().bright_white()
    );
    println!("  Log level:         {}", config.log_level.bright_white());
    println!("  Log format:        {}", config.log_format.bright_white());
    println!();
    println!("{}", "✅ Configuration OK".green().bold());

    Ok(())
}

fn category_label(package: &PricingPackage) -> String {
    serde_json::to_value(package.category)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}
