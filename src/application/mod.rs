//! Application layer services implementing the three endpoints' logic.
//!
//! Services consume the domain's repository and gateway traits, log failures
//! with request context, and hand HTTP handlers ready-made [`crate::AppError`]s.
//!
//! # Available Services
//!
//! - [`services::logo_proxy_service::LogoProxyService`] - Fetch-and-relay of provider logos
//! - [`services::logo_persist_service::LogoPersistService`] - Write-once logo persistence
//! - [`services::contact_service::ContactService`] - Contact form email relay

pub mod services;
