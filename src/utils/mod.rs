//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Opaque share code generation
//! - [`request_origin`] - Public origin extraction and share URL building

pub mod code_generator;
pub mod request_origin;
