//! Build-time content: the pricing catalog and the seed portfolio.

mod pricing;
mod projects;

pub use pricing::pricing_packages;
pub use projects::seed_projects;
