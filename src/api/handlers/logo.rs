//! Handler for the logo proxy endpoint.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::dto::logo::LogoQuery;
use crate::application::services::logo_proxy_service::DOMAIN_REQUIRED_MESSAGE;
use crate::domain::logo_source::LogoSource;
use crate::error::AppError;
use crate::state::AppState;

/// Browser and CDN cache lifetime for proxied logos (24 hours).
pub const LOGO_CACHE_CONTROL: &str = "public, max-age=86400";

/// Proxies a company logo from a third-party provider.
///
/// # Endpoint
///
/// `GET /api/logo?domain=github.com&source=clearbit`
///
/// # Query Parameters
///
/// - `domain` (required) - Company domain
/// - `source` (optional) - `clearbit` (default), `favicon` or `faviconKit`
///
/// # Response
///
/// Raw image bytes with the upstream `Content-Type` and
/// `Cache-Control: public, max-age=86400`.
///
/// # Errors
///
/// - **400 Bad Request**: malformed query, missing domain or unknown source
/// - **404 Not Found**: upstream failure or non-image response
pub async fn logo_handler(
    State(state): State<AppState>,
    query: Result<Query<LogoQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let domain = query
        .domain
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::bad_request(DOMAIN_REQUIRED_MESSAGE))?;

    let source = match query.source.as_deref() {
        Some(raw) => raw
            .parse::<LogoSource>()
            .map_err(|e| AppError::bad_request(e.to_string()))?,
        None => LogoSource::default(),
    };

    let logo = state.logo_proxy_service.fetch_logo(domain, source).await?;

    Ok((
        [
            (header::CONTENT_TYPE, logo.content_type),
            (header::CACHE_CONTROL, LOGO_CACHE_CONTROL.to_string()),
        ],
        logo.bytes,
    )
        .into_response())
}
