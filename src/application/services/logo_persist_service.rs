//! Logo persistence service.

use std::sync::Arc;

use crate::domain::entities::{PersistedLogo, SaveOutcome};
use crate::domain::gateways::ImageFetcher;
use crate::domain::logo_filename::{
    extension_from_url, logo_filename, public_path, sanitize_company_name,
};
use crate::domain::repositories::{LogoRepository, StorageError};
use crate::error::AppError;
use tracing::{error, info, warn};
use url::Url;

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save logo";
pub const EMPTY_NAME_MESSAGE: &str = "Company name must contain at least one letter or digit";

/// Downloads a logo and stores it under a name derived from the company.
///
/// Files are never overwritten: when the derived filename already exists the
/// request still succeeds and points at the existing file.
pub struct LogoPersistService {
    fetcher: Arc<dyn ImageFetcher>,
    repository: Arc<dyn LogoRepository>,
}

impl LogoPersistService {
    /// Creates a new logo persistence service.
    pub fn new(fetcher: Arc<dyn ImageFetcher>, repository: Arc<dyn LogoRepository>) -> Self {
        Self {
            fetcher,
            repository,
        }
    }

    /// Fetches `logo_url` and saves it as `<sanitized company>.<ext>`.
    ///
    /// # Flow
    ///
    /// 1. Parse the URL and derive the filename
    /// 2. Fetch the image
    /// 3. Save it unless a file with that name exists
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the company name sanitizes to nothing.
    ///
    /// Returns [`AppError::Internal`] (with the cause as details) if the URL is
    /// invalid, the fetch fails, or the file cannot be written.
    pub async fn persist(
        &self,
        logo_url: &str,
        company_name: &str,
    ) -> Result<PersistedLogo, AppError> {
        let url = Url::parse(logo_url.trim()).map_err(|e| {
            error!(company = company_name, logo_url, error = %e, "Invalid logo URL");
            AppError::internal(SAVE_FAILED_MESSAGE, format!("Invalid logo URL: {e}"))
        })?;

        // Stricter than the bare derivation, which would happily produce ".png".
        if sanitize_company_name(company_name).is_empty() {
            return Err(AppError::bad_request(EMPTY_NAME_MESSAGE));
        }
        let filename = logo_filename(company_name, &url);

        let image = self.fetcher.fetch(url.as_str()).await.map_err(|e| {
            error!(company = company_name, logo_url, error = %e, "Failed to fetch logo");
            AppError::internal(SAVE_FAILED_MESSAGE, e.to_string())
        })?;

        if let Some(content_type) = image.content_type.as_deref() {
            let extension = extension_from_url(&url);
            if !extension_matches_content_type(&extension, content_type) {
                // The filename keeps the URL's extension regardless.
                warn!(
                    company = company_name,
                    filename = %filename,
                    content_type,
                    "Logo extension does not match content type"
                );
            }
        }

        let outcome = self
            .repository
            .save_if_absent(&filename, &image.bytes)
            .await
            .map_err(|e| {
                error!(
                    company = company_name,
                    filename = %filename,
                    error = %e,
                    "Failed to write logo"
                );
                AppError::internal(SAVE_FAILED_MESSAGE, e.to_string())
            })?;

        match outcome {
            SaveOutcome::Created => info!(
                company = company_name,
                filename = %filename,
                bytes = image.bytes.len(),
                "Logo saved"
            ),
            SaveOutcome::AlreadyExists => info!(
                company = company_name,
                filename = %filename,
                "Logo already present, left untouched"
            ),
        }

        Ok(PersistedLogo {
            public_path: public_path(&filename),
            filename,
            original_url: logo_url.to_string(),
            company: company_name.to_string(),
            outcome,
        })
    }

    /// Reports whether the logo store is usable.
    pub async fn health_check(&self) -> Result<(), StorageError> {
        self.repository.health_check().await
    }
}

/// Loose check that a file extension agrees with a response content type.
///
/// Unknown extensions always agree.
fn extension_matches_content_type(extension: &str, content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let expected: &[&str] = match extension {
        "png" => &["image/png"],
        "jpg" | "jpeg" => &["image/jpeg", "image/jpg"],
        "svg" => &["image/svg+xml"],
        "webp" => &["image/webp"],
        "gif" => &["image/gif"],
        "ico" => &["image/x-icon", "image/vnd.microsoft.icon"],
        "avif" => &["image/avif"],
        _ => return true,
    };

    expected.contains(&mime.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::{FetchError, FetchedImage, MockImageFetcher};
    use crate::domain::repositories::MockLogoRepository;

    fn svg_fetcher(times: usize) -> MockImageFetcher {
        let mut fetcher = MockImageFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url| url == "https://x.com/logo.svg")
            .times(times)
            .returning(|_| {
                Ok(FetchedImage::new(
                    Some("image/svg+xml".to_string()),
                    &b"<svg/>"[..],
                ))
            });
        fetcher
    }

    #[tokio::test]
    async fn test_persist_creates_file() {
        let mut repository = MockLogoRepository::new();
        repository
            .expect_save_if_absent()
            .withf(|filename, bytes| filename == "canva-pro.svg" && bytes == b"<svg/>")
            .times(1)
            .returning(|_, _| Ok(SaveOutcome::Created));

        let service = LogoPersistService::new(Arc::new(svg_fetcher(1)), Arc::new(repository));
        let logo = service
            .persist("https://x.com/logo.svg", "Canva Pro")
            .await
            .unwrap();

        assert_eq!(logo.filename, "canva-pro.svg");
        assert_eq!(logo.public_path, "/logos/canva-pro.svg");
        assert_eq!(logo.original_url, "https://x.com/logo.svg");
        assert_eq!(logo.company, "Canva Pro");
        assert!(logo.was_created());
    }

    #[tokio::test]
    async fn test_persist_existing_file_is_success() {
        let mut repository = MockLogoRepository::new();
        repository
            .expect_save_if_absent()
            .times(1)
            .returning(|_, _| Ok(SaveOutcome::AlreadyExists));

        let service = LogoPersistService::new(Arc::new(svg_fetcher(1)), Arc::new(repository));
        let logo = service
            .persist("https://x.com/logo.svg", "Canva Pro")
            .await
            .unwrap();

        assert_eq!(logo.outcome, SaveOutcome::AlreadyExists);
        assert_eq!(logo.public_path, "/logos/canva-pro.svg");
    }

    #[tokio::test]
    async fn test_persist_defaults_extension_to_png() {
        let mut fetcher = MockImageFetcher::new();
        fetcher.expect_fetch().times(1).returning(|_| {
            Ok(FetchedImage::new(
                Some("image/svg+xml".to_string()),
                &b"<svg/>"[..],
            ))
        });

        let mut repository = MockLogoRepository::new();
        repository
            .expect_save_if_absent()
            .withf(|filename, _| filename == "ai-cloud.png")
            .times(1)
            .returning(|_, _| Ok(SaveOutcome::Created));

        let service = LogoPersistService::new(Arc::new(fetcher), Arc::new(repository));
        let logo = service
            .persist("https://cdn.example.com/brand/logo", "AI/Cloud!!")
            .await
            .unwrap();

        assert_eq!(logo.filename, "ai-cloud.png");
    }

    #[tokio::test]
    async fn test_persist_invalid_url() {
        let mut fetcher = MockImageFetcher::new();
        fetcher.expect_fetch().never();
        let mut repository = MockLogoRepository::new();
        repository.expect_save_if_absent().never();

        let service = LogoPersistService::new(Arc::new(fetcher), Arc::new(repository));
        let result = service.persist("not a url", "Canva").await;

        match result.unwrap_err() {
            AppError::Internal { message, details } => {
                assert_eq!(message, SAVE_FAILED_MESSAGE);
                assert!(details.unwrap().contains("Invalid logo URL"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_persist_symbol_only_company() {
        let mut fetcher = MockImageFetcher::new();
        fetcher.expect_fetch().never();
        let repository = MockLogoRepository::new();

        let service = LogoPersistService::new(Arc::new(fetcher), Arc::new(repository));
        let result = service.persist("https://x.com/logo.svg", "!!!").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_persist_fetch_failure() {
        let mut fetcher = MockImageFetcher::new();
        fetcher.expect_fetch().times(1).returning(|url| {
            Err(FetchError::Status {
                url: url.to_string(),
                status: 403,
            })
        });
        let mut repository = MockLogoRepository::new();
        repository.expect_save_if_absent().never();

        let service = LogoPersistService::new(Arc::new(fetcher), Arc::new(repository));
        let result = service.persist("https://x.com/logo.svg", "Canva").await;

        match result.unwrap_err() {
            AppError::Internal { details, .. } => {
                assert!(details.unwrap().contains("403"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_persist_storage_failure() {
        let mut repository = MockLogoRepository::new();
        repository.expect_save_if_absent().times(1).returning(|_, _| {
            Err(StorageError::io(
                "public/logos/canva.svg",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ))
        });

        let service = LogoPersistService::new(Arc::new(svg_fetcher(1)), Arc::new(repository));
        let result = service.persist("https://x.com/logo.svg", "Canva").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[test]
    fn test_extension_matches_content_type() {
        assert!(extension_matches_content_type("png", "image/png"));
        assert!(extension_matches_content_type("svg", "image/svg+xml; charset=utf-8"));
        assert!(extension_matches_content_type("jpg", "IMAGE/JPEG"));
        assert!(extension_matches_content_type("bmp", "image/png"));
        assert!(!extension_matches_content_type("png", "image/svg+xml"));
        assert!(!extension_matches_content_type("ico", "image/png"));
    }
}
