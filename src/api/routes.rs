//! API route configuration.
//!
//! The endpoints are public; the site calls them straight from the browser.

use crate::api::handlers::{contact_handler, logo_handler, save_logo_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /logo`       - Proxy a provider logo (`domain`, `source` query params)
/// - `POST /save-logo`  - Fetch a logo once and persist it under `/logos`
/// - `POST /contact`    - Relay a contact form submission by email
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/logo", get(logo_handler))
        .route("/save-logo", post(save_logo_handler))
        .route("/contact", post(contact_handler))
}
