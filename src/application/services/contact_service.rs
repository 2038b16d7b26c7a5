//! Contact form relay service.

use std::sync::Arc;

use crate::config::ContactConfig;
use crate::domain::entities::{ContactMessage, OutgoingEmail};
use crate::domain::gateways::{EmailError, EmailSender};
use crate::error::AppError;
use askama::Template;
use axum::http::StatusCode;
use serde_json::{Value, json};
use tracing::{error, info};

pub const SEND_FAILED_MESSAGE: &str = "Failed to send message";

/// HTML body of the notification. Fields are escaped by the template.
#[derive(Template)]
#[template(path = "contact_email.html")]
struct ContactEmailHtml<'a> {
    name: &'a str,
    email: &'a str,
    lines: Vec<&'a str>,
}

/// Plain-text alternative of the notification.
#[derive(Template)]
#[template(path = "contact_email.txt")]
struct ContactEmailText<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// Turns contact form submissions into emails for the site owners.
///
/// Sender and recipient are fixed at startup from [`ContactConfig`]. The
/// submitter's address is only used as `reply_to`.
pub struct ContactService {
    sender: Arc<dyn EmailSender>,
    from_address: String,
    to_address: String,
}

impl ContactService {
    /// Creates a new contact service.
    pub fn new(sender: Arc<dyn EmailSender>, config: &ContactConfig) -> Self {
        Self {
            sender,
            from_address: config.from_address.clone(),
            to_address: config.to_address.clone(),
        }
    }

    /// Builds the email delivered for `message`.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to render.
    pub fn build_email(&self, message: &ContactMessage) -> Result<OutgoingEmail, askama::Error> {
        let html = ContactEmailHtml {
            name: &message.name,
            email: &message.email,
            lines: message.message.lines().collect(),
        }
        .render()?;
        let text = ContactEmailText {
            name: &message.name,
            email: &message.email,
            message: &message.message,
        }
        .render()?;

        Ok(OutgoingEmail {
            from: self.from_address.clone(),
            to: vec![self.to_address.clone()],
            subject: format!("New contact form submission from {}", message.name),
            html,
            text,
            reply_to: Some(message.email.clone()),
        })
    }

    /// Sends `message` and returns the provider's response payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] carrying the provider's status and its
    /// error payload under `error` when the provider rejects the email.
    ///
    /// Returns [`AppError::Internal`] if the provider could not be reached.
    pub async fn relay(&self, message: &ContactMessage) -> Result<Value, AppError> {
        let email = self.build_email(message).map_err(|e| {
            error!(from = %message.email, error = %e, "Failed to render contact email");
            AppError::Internal {
                message: SEND_FAILED_MESSAGE.to_string(),
                details: None,
            }
        })?;

        match self.sender.send(&email).await {
            Ok(payload) => {
                info!(from = %message.email, "Contact message relayed");
                Ok(payload)
            }
            Err(EmailError::Provider { status, body }) => {
                error!(
                    from = %message.email,
                    status,
                    body = %body,
                    "Email provider rejected contact message"
                );
                let status = StatusCode::from_u16(status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                Err(AppError::upstream(status, json!({ "error": body })))
            }
            Err(e @ EmailError::Transport(_)) => {
                error!(from = %message.email, error = %e, "Email provider unreachable");
                Err(AppError::Internal {
                    message: SEND_FAILED_MESSAGE.to_string(),
                    details: None,
                })
            }
        }
    }
}
