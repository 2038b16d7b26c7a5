//! Outbound gateways to third-party services.
//!
//! - [`ImageFetcher`] - Downloads images over HTTP
//! - [`EmailSender`] - Delivers email through a transactional provider
//!
//! Implementations live in `crate::infrastructure::http`.

pub mod email_sender;
pub mod image_fetcher;

pub use email_sender::{EmailError, EmailSender};
pub use image_fetcher::{FetchError, FetchedImage, ImageFetcher};

#[cfg(test)]
pub use email_sender::MockEmailSender;
#[cfg(test)]
pub use image_fetcher::MockImageFetcher;
