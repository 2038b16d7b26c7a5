//! Handler for the contact relay endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;
use validator::Validate;

use crate::api::dto::contact::ContactRequest;
use crate::error::{AppError, MISSING_FIELDS_MESSAGE};
use crate::state::AppState;

/// Forwards a contact form submission to the email provider.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// { "name": "Ada", "email": "ada@example.com", "message": "Hi!" }
/// ```
///
/// # Response
///
/// The provider's success payload, e.g. `{"id": "..."}`.
///
/// # Errors
///
/// - **400 Bad Request**: `{"error": "Missing required fields"}`; nothing is sent
/// - Provider status with `{"error": <provider payload>}` when the provider rejects the email
/// - **500 Internal Server Error**: provider unreachable
pub async fn contact_handler(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let message = payload
        .into_message()
        .ok_or_else(|| AppError::bad_request(MISSING_FIELDS_MESSAGE))?;

    let response = state.contact_service.relay(&message).await?;

    Ok(Json(response))
}
