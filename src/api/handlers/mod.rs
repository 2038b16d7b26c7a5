//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod contact;
pub mod health;
pub mod logo;
pub mod save_logo;

pub use contact::contact_handler;
pub use health::health_handler;
pub use logo::logo_handler;
pub use save_logo::save_logo_handler;
