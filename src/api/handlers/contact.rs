//! Handlers for the contact form.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::contact::{ContactCreatedResponse, ContactRequest, ContactSubmissionResponse};
use crate::api::extract::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a contact form submission.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "phone": "+254700000000",
///   "serviceInterest": "website",
///   "message": "We need a new marketing site"
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "success": true,
///   "message": "Contact form submitted successfully",
///   "submissionId": "9b2f..."
/// }
/// ```
///
/// # Errors
///
/// Returns 400 with field-level details if the body violates the schema.
pub async fn submit_contact_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ContactRequest>,
) -> Result<(StatusCode, Json<ContactCreatedResponse>), AppError> {
    payload.validate()?;

    let submission = state.contact_service.submit(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ContactCreatedResponse {
            success: true,
            message: "Contact form submitted successfully".to_string(),
            submission_id: submission.id,
        }),
    ))
}

/// Lists every submission received since startup.
///
/// # Endpoint
///
/// `GET /api/contact/submissions`
pub async fn list_submissions_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactSubmissionResponse>>, AppError> {
    let submissions = state.contact_service.list_submissions().await?;

    Ok(Json(submissions.into_iter().map(Into::into).collect()))
}
