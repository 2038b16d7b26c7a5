//! Handler for the logo persistence endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::save_logo::{SaveLogoRequest, SaveLogoResponse};
use crate::error::{AppError, MISSING_FIELDS_MESSAGE};
use crate::state::AppState;

/// Fetches a logo once and stores it in the public logos directory.
///
/// # Endpoint
///
/// `POST /api/save-logo`
///
/// # Request Body
///
/// ```json
/// { "logoUrl": "https://x.com/logo.svg", "companyName": "Canva Pro" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "localPath": "/logos/canva-pro.svg",
///   "originalUrl": "https://x.com/logo.svg",
///   "company": "Canva Pro"
/// }
/// ```
///
/// An existing file with the same name is kept and the same response returned.
///
/// # Errors
///
/// - **400 Bad Request**: missing or blank fields
/// - **500 Internal Server Error**: `{error, details}` on fetch, URL or filesystem failure
pub async fn save_logo_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveLogoRequest>, JsonRejection>,
) -> Result<Json<SaveLogoResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let (Some(logo_url), Some(company_name)) = (payload.logo_url, payload.company_name) else {
        return Err(AppError::bad_request(MISSING_FIELDS_MESSAGE));
    };

    let logo = state
        .logo_persist_service
        .persist(&logo_url, &company_name)
        .await?;

    Ok(Json(logo.into()))
}
