//! Resend HTTP API implementation of the email sender.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use crate::config::ContactConfig;
use crate::domain::entities::OutgoingEmail;
use crate::domain::gateways::{EmailError, EmailSender};

/// Sends email through `POST {api_url}/emails`.
pub struct ResendEmailSender {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ResendEmailSender {
    pub fn new(client: Client, config: &ContactConfig) -> Self {
        Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.api_url)
    }
}

/// Parses a provider response body, wrapping non-JSON text as `{"message": ...}`.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "message": text }))
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<Value, EmailError> {
        debug!(to = ?email.to, subject = %email.subject, "Sending email");

        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| EmailError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| EmailError::Transport(e.to_string()))?;
        let body = parse_body(&text);

        if !status.is_success() {
            return Err(EmailError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
