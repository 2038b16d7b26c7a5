//! Domain layer containing the logo pipeline model and its contracts.
//!
//! Nothing in here knows about Axum, `reqwest` or the filesystem. Adapters for
//! those live in [`crate::infrastructure`] and are injected into the services in
//! [`crate::application::services`].
//!
//! # Architecture
//!
//! - [`entities`] - Transient request/result shapes
//! - [`logo_source`] - Closed set of third-party logo providers
//! - [`logo_filename`] - Company name to filename derivation
//! - [`repositories`] - Storage trait for persisted logos
//! - [`gateways`] - Traits for outbound image fetches and email delivery

pub mod entities;
pub mod gateways;
pub mod logo_filename;
pub mod logo_source;
pub mod repositories;
