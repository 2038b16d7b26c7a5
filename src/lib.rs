//! # Freebie API
//!
//! Backend for the Freebie Terrorist student-discount site, built with Axum.
//!
//! ## Architecture
//!
//! The crate follows the same layered layout throughout:
//!
//! - **Domain Layer** ([`domain`]) - Logo sources, filename rules, entities and traits
//! - **Application Layer** ([`application`]) - Logo proxy, logo persister, contact relay
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` adapters and filesystem storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Logo proxy over Clearbit, Google favicons and FaviconKit with image validation
//! - Write-once logo persistence into the public assets directory
//! - Contact form relay through the Resend email API
//!
//! ## Quick Start
//!
//! ```bash
//! export RESEND_API_KEY="re_..."
//! export CONTACT_TO="hello@example.com"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ContactService, LogoPersistService, LogoProxyService};
    pub use crate::domain::entities::{ContactMessage, PersistedLogo, ProxiedLogo, SaveOutcome};
    pub use crate::domain::logo_source::LogoSource;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
