//! Logo proxy service.

use std::sync::Arc;

use crate::domain::entities::ProxiedLogo;
use crate::domain::gateways::ImageFetcher;
use crate::domain::logo_source::LogoSource;
use crate::error::AppError;
use tracing::{debug, warn};

pub const DOMAIN_REQUIRED_MESSAGE: &str = "Domain parameter is required";
pub const LOGO_NOT_FOUND_MESSAGE: &str = "Logo not found";

/// Fetches logos from third-party providers on behalf of the browser.
///
/// Nothing is cached or stored here; caching is left to the client through the
/// `Cache-Control` header set by the handler.
pub struct LogoProxyService {
    fetcher: Arc<dyn ImageFetcher>,
}

impl LogoProxyService {
    /// Creates a new logo proxy service.
    pub fn new(fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetches the logo for `domain` from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `domain` is blank.
    ///
    /// Returns [`AppError::NotFound`] if the fetch fails, the upstream status is
    /// not 2xx, or the response is not an `image/*` content type. No retries.
    pub async fn fetch_logo(
        &self,
        domain: &str,
        source: LogoSource,
    ) -> Result<ProxiedLogo, AppError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(AppError::bad_request(DOMAIN_REQUIRED_MESSAGE));
        }

        let url = source.logo_url(domain);
        debug!(domain, %source, %url, "Fetching logo");

        let image = self.fetcher.fetch(&url).await.map_err(|e| {
            warn!(domain, %source, error = %e, "Logo fetch failed");
            AppError::not_found(LOGO_NOT_FOUND_MESSAGE)
        })?;

        let is_image = image.is_image();
        match image.content_type {
            Some(content_type) if is_image => Ok(ProxiedLogo {
                content_type,
                bytes: image.bytes,
            }),
            other => {
                warn!(
                    domain,
                    %source,
                    content_type = other.as_deref().unwrap_or("none"),
                    "Upstream response is not an image"
                );
                Err(AppError::not_found(LOGO_NOT_FOUND_MESSAGE))
            }
        }
    }
}
