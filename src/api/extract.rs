//! Request extractors that report rejections as [`AppError`].
//!
//! axum's stock `Json` and `Query` extractors answer malformed input with
//! plain-text 400/415/422 responses. These wrappers route the rejection
//! through [`AppError`] so every schema violation renders as
//! `400 { "error": "Validation failed", "details": ... }`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor with [`AppError`] rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string extractor with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
