//! Repository trait for persisted logo files.

use crate::domain::entities::{SaveOutcome, StoredLogo};
use async_trait::async_trait;

/// Errors raised by logo storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid logo filename '{0}'")]
    InvalidFilename(String),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Storage for logo images keyed by filename.
///
/// Files are write-once: a save never replaces an existing file, so assets
/// placed by hand survive automated fetches.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FsLogoRepository`] - Public assets directory on local disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogoRepository: Send + Sync {
    /// Stores `bytes` under `filename` unless a file with that name exists.
    ///
    /// The existence check and the write must be a single atomic step, so that
    /// concurrent saves of the same name produce exactly one write.
    ///
    /// # Returns
    ///
    /// - `Ok(SaveOutcome::Created)` if this call wrote the file
    /// - `Ok(SaveOutcome::AlreadyExists)` if the file was already there
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidFilename`] for names containing path separators.
    /// Returns [`StorageError::Io`] on filesystem errors.
    async fn save_if_absent(&self, filename: &str, bytes: &[u8])
    -> Result<SaveOutcome, StorageError>;

    /// Lists stored logos sorted by filename.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be read.
    async fn list(&self) -> Result<Vec<StoredLogo>, StorageError>;

    /// Checks that the backing directory exists and accepts writes.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] describing why the store is unusable.
    async fn health_check(&self) -> Result<(), StorageError>;
}
