#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use freebie_api::config::ContactConfig;
use freebie_api::domain::entities::OutgoingEmail;
use freebie_api::domain::gateways::{
    EmailError, EmailSender, FetchError, FetchedImage, ImageFetcher,
};
use freebie_api::infrastructure::persistence::FsLogoRepository;
use freebie_api::routes::build_router;
use freebie_api::state::AppState;

pub const SVG_BYTES: &[u8] = b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>";

/// Image fetcher returning one canned result and recording requested URLs.
pub struct StubFetcher {
    response: Result<FetchedImage, FetchError>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn image(content_type: &str, bytes: &'static [u8]) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(FetchedImage::new(Some(content_type.to_string()), bytes)),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn status(status: u16) -> Arc<Self> {
        Arc::new(Self {
            response: Err(FetchError::Status {
                url: "stub".to_string(),
                status,
            }),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.response.clone()
    }
}

/// Email sender returning one canned result and recording sent emails.
pub struct RecordingEmailSender {
    response: Result<Value, (u16, Value)>,
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingEmailSender {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            response: Ok(json!({ "id": "email_123" })),
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn rejecting(status: u16, body: Value) -> Arc<Self> {
        Arc::new(Self {
            response: Err((status, body)),
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<Value, EmailError> {
        self.sent.lock().unwrap().push(email.clone());
        self.response
            .clone()
            .map_err(|(status, body)| EmailError::Provider { status, body })
    }
}

pub fn contact_config() -> ContactConfig {
    ContactConfig {
        api_key: "re_test_key_123".to_string(),
        from_address: "Freebie Terrorist <onboarding@resend.dev>".to_string(),
        to_address: "team@example.com".to_string(),
        api_url: "https://api.resend.com".to_string(),
    }
}

/// Router over a temporary logos directory. Keep the `TempDir` alive for the
/// duration of the test.
pub struct TestApp {
    pub router: Router,
    pub logos_dir: TempDir,
}

pub fn create_test_app(fetcher: Arc<StubFetcher>, sender: Arc<RecordingEmailSender>) -> TestApp {
    let logos_dir = TempDir::new().unwrap();
    let state = AppState::new(
        fetcher,
        Arc::new(FsLogoRepository::new(logos_dir.path())),
        sender,
        &contact_config(),
    );
    let router = build_router(state, logos_dir.path());

    TestApp { router, logos_dir }
}
