//! Business logic services for the application layer.

pub mod contact_service;
pub mod logo_persist_service;
pub mod logo_proxy_service;

pub use contact_service::ContactService;
pub use logo_persist_service::LogoPersistService;
pub use logo_proxy_service::LogoProxyService;
