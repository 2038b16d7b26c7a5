//! Filesystem repository implementations.
//!
//! # Repositories
//!
//! - [`FsLogoRepository`] - Write-once logo files in the public assets directory

pub mod fs_logo_repository;

pub use fs_logo_repository::FsLogoRepository;
