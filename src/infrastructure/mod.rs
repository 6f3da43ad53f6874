//! Infrastructure layer.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`catalog`] - Static pricing catalog and seed projects
//! - [`memory`] - In-memory repository implementations

pub mod catalog;
pub mod memory;
