//! Application error type and its HTTP rendering.
//!
//! Every handler returns `Result<_, AppError>`. The variant decides the status
//! code; the response body is always a flat JSON object:
//!
//! ```json
//! { "error": "Validation failed", "details": { "message": [ ... ] } }
//! ```
//!
//! `details` is only rendered for client errors (400/409). Not-found and
//! internal errors expose the message alone; internal details are logged.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

/// Message used for every schema violation on request input.
pub const VALIDATION_FAILED: &str = "Validation failed";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::Validation { message, details } | AppError::Conflict { message, details } => {
                ErrorBody {
                    error: message,
                    details,
                }
            }
            AppError::NotFound { message, details } => {
                tracing::debug!(%details, "{}", message);
                ErrorBody {
                    error: message,
                    details: Value::Null,
                }
            }
            AppError::Internal { message, details } => {
                tracing::error!(%details, "{}", message);
                ErrorBody {
                    error: message,
                    details: Value::Null,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Converts `validator` failures into a field-keyed detail map.
///
/// Keys are the camelCase names the field has on the wire, not the Rust
/// field names.
///
/// ```json
/// { "packageId": [ { "code": "length", "message": "Package id is required" } ] }
/// ```
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: BTreeMap<String, Vec<Value>> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let items = errs
                    .iter()
                    .map(|e| {
                        json!({
                            "code": e.code,
                            "message": e.message.as_deref().unwrap_or("Invalid value"),
                        })
                    })
                    .collect();
                (camel_case(&field), items)
            })
            .collect();

        AppError::bad_request(VALIDATION_FAILED, json!(fields))
    }
}

/// `service_interest` -> `serviceInterest`.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;

    for c in field.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(VALIDATION_FAILED, json!({ "body": rejection.body_text() }))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(VALIDATION_FAILED, json!({ "query": rejection.body_text() }))
    }
}
