//! DTOs for the contact relay endpoint.

use serde::Deserialize;
use validator::Validate;

use super::not_blank;
use crate::domain::entities::ContactMessage;

/// Contact form submission.
///
/// The email address is not format-checked. It only ends up as `reply_to`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub email: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub message: Option<String>,
}

impl ContactRequest {
    /// Converts a validated request into a [`ContactMessage`].
    ///
    /// Returns `None` if a field is missing; call `validate()` first.
    pub fn into_message(self) -> Option<ContactMessage> {
        Some(ContactMessage::new(self.name?, self.email?, self.message?))
    }
}
