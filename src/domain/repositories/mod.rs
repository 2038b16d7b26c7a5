//! Repository trait definitions for the domain layer.
//!
//! # Available Repositories
//!
//! - [`LogoRepository`] - Write-once storage for persisted logo files
//!
//! Implementations live in `crate::infrastructure::persistence`; mocks are
//! generated with `mockall` for unit tests.

pub mod logo_repository;

pub use logo_repository::{LogoRepository, StorageError};

#[cfg(test)]
pub use logo_repository::MockLogoRepository;
