//! Gateway trait for transactional email delivery.

use crate::domain::entities::OutgoingEmail;
use async_trait::async_trait;
use serde_json::Value;

/// Errors from the email provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmailError {
    /// The provider answered with an error. Status and body are relayed to the client as-is.
    #[error("email provider returned HTTP {status}")]
    Provider { status: u16, body: Value },

    /// The provider could not be reached or its response could not be read.
    #[error("email provider unreachable: {0}")]
    Transport(String),
}

/// Sends email through an external provider.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ResendEmailSender`] - Resend HTTP API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends one email and returns the provider's success payload.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Provider`] for provider-side rejections and
    /// [`EmailError::Transport`] when no response was received.
    async fn send(&self, email: &OutgoingEmail) -> Result<Value, EmailError>;
}
