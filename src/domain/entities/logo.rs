//! Logo entities produced by the proxy and persister services.

use bytes::Bytes;

/// Logo image fetched from a third-party provider, ready to be streamed back.
#[derive(Debug, Clone)]
pub struct ProxiedLogo {
    pub content_type: String,
    pub bytes: Bytes,
}

/// Whether a save actually created the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    /// A file with the same name was already present and was left untouched.
    AlreadyExists,
}

/// A logo saved (or found already saved) under the public logos directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedLogo {
    pub filename: String,
    /// Path the static file server exposes the logo under, e.g. `/logos/canva-pro.svg`.
    pub public_path: String,
    pub original_url: String,
    pub company: String,
    pub outcome: SaveOutcome,
}

impl PersistedLogo {
    /// Returns true if this call wrote the file.
    pub fn was_created(&self) -> bool {
        self.outcome == SaveOutcome::Created
    }
}

/// A logo file found in the logos directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredLogo {
    pub filename: String,
    pub size_bytes: u64,
}
