//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ContactService, LogoPersistService, LogoProxyService};
use crate::config::ContactConfig;
use crate::domain::gateways::{EmailSender, ImageFetcher};
use crate::domain::repositories::LogoRepository;

/// Services shared by all handlers. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub logo_proxy_service: Arc<LogoProxyService>,
    pub logo_persist_service: Arc<LogoPersistService>,
    pub contact_service: Arc<ContactService>,
}

impl AppState {
    /// Wires the services from their gateways and repository.
    ///
    /// Proxy and persister share one image fetcher.
    pub fn new(
        fetcher: Arc<dyn ImageFetcher>,
        logo_repository: Arc<dyn LogoRepository>,
        email_sender: Arc<dyn EmailSender>,
        contact: &ContactConfig,
    ) -> Self {
        Self {
            logo_proxy_service: Arc::new(LogoProxyService::new(fetcher.clone())),
            logo_persist_service: Arc::new(LogoPersistService::new(fetcher, logo_repository)),
            contact_service: Arc::new(ContactService::new(email_sender, contact)),
        }
    }
}
