//! Core domain entities.
//!
//! None of these outlive a single request except [`PersistedLogo`], whose
//! backing file is created at most once and never touched again.
//!
//! # Entity Types
//!
//! - [`ProxiedLogo`] - Image bytes fetched on behalf of a client
//! - [`PersistedLogo`] - Result of saving a logo into the public directory
//! - [`StoredLogo`] - A logo file already present on disk
//! - [`ContactMessage`] / [`OutgoingEmail`] - Contact form payload and the email built from it

pub mod contact;
pub mod logo;

pub use contact::{ContactMessage, OutgoingEmail};
pub use logo::{PersistedLogo, ProxiedLogo, SaveOutcome, StoredLogo};
