//! Outbound HTTP adapters built on a shared `reqwest::Client`.
//!
//! - [`HttpImageFetcher`] - Image downloads with a browser `User-Agent`
//! - [`ResendEmailSender`] - Resend transactional email API

pub mod image_fetcher;
pub mod resend_email_sender;

pub use image_fetcher::{BROWSER_USER_AGENT, HttpImageFetcher};
pub use resend_email_sender::ResendEmailSender;

use std::time::Duration;

/// Builds the HTTP client shared by all outbound adapters.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}
