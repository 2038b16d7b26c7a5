//! Local filesystem implementation of the logo repository.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::entities::{SaveOutcome, StoredLogo};
use crate::domain::repositories::{LogoRepository, StorageError};

/// Stores logos as plain files in a single directory.
///
/// Saves are atomic create-if-absent: bytes go to a hidden temporary file in the
/// same directory, which is then hard-linked to the final name. `link(2)` fails
/// if the target exists, so concurrent saves of one name yield a single writer
/// and readers never observe a partially written logo.
pub struct FsLogoRepository {
    dir: PathBuf,
}

impl FsLogoRepository {
    /// Creates a repository rooted at `dir`. The directory is created lazily.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the logos directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::io(self.dir.display().to_string(), e))
    }

    fn path_for(&self, filename: &str) -> Result<PathBuf, StorageError> {
        let valid = !filename.is_empty()
            && !filename.starts_with('.')
            && !filename.contains(['/', '\\', '\0']);

        if !valid {
            return Err(StorageError::InvalidFilename(filename.to_string()));
        }

        Ok(self.dir.join(filename))
    }

    fn temp_path_for(&self, filename: &str) -> PathBuf {
        self.dir
            .join(format!(".{filename}.{:016x}.tmp", rand::random::<u64>()))
    }
}

/// Removes a temporary file, partially written or not. A missing file is fine.
async fn discard_temp(temp: &Path) {
    match fs::remove_file(temp).await {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            warn!(path = %temp.display(), error = %e, "Failed to remove temporary logo file");
        }
    }
}

#[async_trait]
impl LogoRepository for FsLogoRepository {
    async fn save_if_absent(
        &self,
        filename: &str,
        bytes: &[u8],
    ) -> Result<SaveOutcome, StorageError> {
        let target = self.path_for(filename)?;

        if fs::try_exists(&target)
            .await
            .map_err(|e| StorageError::io(target.display().to_string(), e))?
        {
            debug!(path = %target.display(), "Logo exists, skipping write");
            return Ok(SaveOutcome::AlreadyExists);
        }

        self.ensure_dir().await?;

        let temp = self.temp_path_for(filename);
        if let Err(e) = fs::write(&temp, bytes).await {
            discard_temp(&temp).await;
            return Err(StorageError::io(temp.display().to_string(), e));
        }

        let linked = fs::hard_link(&temp, &target).await;
        discard_temp(&temp).await;

        match linked {
            Ok(()) => Ok(SaveOutcome::Created),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(
                    path = %target.display(),
                    "Lost race to concurrent writer, keeping existing logo"
                );
                Ok(SaveOutcome::AlreadyExists)
            }
            Err(e) => Err(StorageError::io(target.display().to_string(), e)),
        }
    }

    async fn list(&self) -> Result<Vec<StoredLogo>, StorageError> {
        let dir_err = |e: std::io::Error| StorageError::io(self.dir.display().to_string(), e);

        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(dir_err(e)),
        };

        let mut logos = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(dir_err)? {
            let filename = entry.file_name().to_string_lossy().into_owned();
            if filename.starts_with('.') {
                continue;
            }

            let metadata = entry.metadata().await.map_err(dir_err)?;
            if metadata.is_file() {
                logos.push(StoredLogo {
                    filename,
                    size_bytes: metadata.len(),
                });
            }
        }

        logos.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(logos)
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        self.ensure_dir().await?;

        let metadata = fs::metadata(&self.dir)
            .await
            .map_err(|e| StorageError::io(self.dir.display().to_string(), e))?;

        if metadata.permissions().readonly() {
            return Err(StorageError::io(
                self.dir.display().to_string(),
                std::io::Error::new(ErrorKind::PermissionDenied, "directory is read-only"),
            ));
        }

        Ok(())
    }
}
