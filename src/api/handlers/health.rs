//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Pricing catalog**: At least one package loaded
/// 2. **Share links**: Link store answers and reports its size
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "pricing_catalog": { "status": "ok", "message": "6 packages" },
///     "share_links": { "status": "ok", "message": "12 links issued" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_pricing_catalog(&state);

    let links_check = check_share_links(&state).await;

    let all_healthy = catalog_check.status == "ok" && links_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            pricing_catalog: catalog_check,
            share_links: links_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the pricing catalog is populated.
fn check_pricing_catalog(state: &AppState) -> CheckStatus {
    let count = state.pricing_service.list_packages().len();

    if count == 0 {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Pricing catalog is empty".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{count} packages")),
        }
    }
}

/// Checks that the share link store answers.
async fn check_share_links(state: &AppState) -> CheckStatus {
    match state.share_link_service.link_count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{count} links issued")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Link store error: {}", e)),
        },
    }
}
