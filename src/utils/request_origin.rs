//! Public origin extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;

/// Header set by reverse proxies carrying the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds `scheme://host[:port]` for the request as the client saw it.
///
/// The scheme comes from the first `X-Forwarded-Proto` value when it is
/// `http` or `https`, otherwise `http`. The host is the `Host` header, port
/// included; HTTP/2 requests carry it as the URI authority instead, which is
/// used when no `Host` header is present.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if neither a `Host` header nor a URI
/// authority is present, or the host is empty or not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// assert_eq!(
///     request_origin(&headers, &Uri::from_static("/api/pricing/share")).unwrap(),
///     "http://example.com:8080"
/// );
/// ```
pub fn request_origin(headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
            .trim(),
        None => uri
            .authority()
            .map(|a| a.as_str())
            .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?,
    };

    if host.is_empty() {
        return Err(AppError::bad_request("Invalid Host header", json!({})));
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    Ok(format!("{scheme}://{host}"))
}

/// Joins a base URL and a share code into the public share page URL.
pub fn share_url(base: &str, code: &str) -> String {
    format!("{}/pricing/share/{}", base.trim_end_matches('/'), code)
}
