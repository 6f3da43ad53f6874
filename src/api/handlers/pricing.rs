//! Handlers for the pricing catalog and shareable pricing links.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri},
};
use validator::Validate;

use crate::api::dto::pricing::{
    PricingPackageResponse, ShareLinkCreatedResponse, ShareLinkRequest, ShareLinkSummary,
    ShareableLinkResponse,
};
use crate::api::extract::AppJson;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::{request_origin, share_url};

/// Lists the pricing catalog in display order.
///
/// # Endpoint
///
/// `GET /api/pricing/packages`
pub async fn list_packages_handler(
    State(state): State<AppState>,
) -> Json<Vec<PricingPackageResponse>> {
    Json(
        state
            .pricing_service
            .list_packages()
            .iter()
            .map(Into::into)
            .collect(),
    )
}

/// Retrieves a single catalog package.
///
/// # Endpoint
///
/// `GET /api/pricing/packages/{id}`
///
/// # Errors
///
/// Returns 404 if no package has this id.
pub async fn get_package_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PricingPackageResponse>, AppError> {
    let package = state.pricing_service.get_package(&id)?;

    Ok(Json(package.into()))
}

/// Issues a shareable link for a pricing package.
///
/// # Endpoint
///
/// `POST /api/pricing/share`
///
/// # Request Body
///
/// ```json
/// { "packageId": "professional-website" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "success": true,
///   "link": {
///     "id": "3f9a1c07",
///     "packageId": "professional-website",
///     "url": "https://agency.example/pricing/share/3f9a1c07",
///     "createdAt": "2026-01-01T12:00:00Z"
///   }
/// }
/// ```
///
/// The URL base is `PUBLIC_BASE_URL` when configured, otherwise the
/// request's own scheme and host (`Host` header, or the URI authority on
/// HTTP/2).
///
/// # Errors
///
/// Returns 400 if the body is malformed, the package is unknown, or no base
/// URL can be determined.
pub async fn create_share_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    AppJson(payload): AppJson<ShareLinkRequest>,
) -> Result<(StatusCode, Json<ShareLinkCreatedResponse>), AppError> {
    payload.validate()?;

    let base = match &state.public_base_url {
        Some(base) => base.clone(),
        None => request_origin(&headers, &uri)?,
    };

    let link = state
        .share_link_service
        .create_link(&payload.package_id)
        .await?;

    let url = share_url(&base, &link.id);

    Ok((
        StatusCode::CREATED,
        Json(ShareLinkCreatedResponse {
            success: true,
            link: ShareLinkSummary {
                id: link.id,
                package_id: link.package_id,
                url,
                created_at: link.created_at,
            },
        }),
    ))
}

/// Resolves a shareable link, counting the view.
///
/// # Endpoint
///
/// `GET /api/pricing/share/{id}`
///
/// The returned `viewCount` already includes this request.
///
/// # Errors
///
/// Returns 404 if no link has this id.
pub async fn resolve_share_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShareableLinkResponse>, AppError> {
    let link = state.share_link_service.resolve_link(&id).await?;

    Ok(Json(link.into()))
}
