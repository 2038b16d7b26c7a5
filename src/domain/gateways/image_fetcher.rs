//! Gateway trait for downloading remote images.

use async_trait::async_trait;
use bytes::Bytes;

/// Raw response from an image fetch.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    /// Upstream `Content-Type`, if it sent one.
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl FetchedImage {
    pub fn new(content_type: Option<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            content_type,
            bytes: bytes.into(),
        }
    }

    /// True if the content type starts with `image/` (case-insensitive).
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("image/"))
    }
}

/// Errors from an outbound fetch. Every variant is terminal for the request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure.
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// Upstream answered with a non-2xx status.
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Fetches images over HTTP.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpImageFetcher`] - `reqwest` client with a browser `User-Agent`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// GETs `url` and returns the body with its content type.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] for non-success responses and
    /// [`FetchError::Request`] for transport failures. No retries.
    async fn fetch(&self, url: &str) -> Result<FetchedImage, FetchError>;
}
