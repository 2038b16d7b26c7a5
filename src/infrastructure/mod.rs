//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the domain's repository and gateway traits.
//!
//! # Modules
//!
//! - [`http`] - `reqwest` adapters for logo hosts and the email provider
//! - [`persistence`] - Local filesystem storage for persisted logos

pub mod http;
pub mod persistence;
