//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies use Serde for JSON and `validator` for required-field checks.
//! Field names follow the site's camelCase JSON.

pub mod contact;
pub mod health;
pub mod logo;
pub mod save_logo;

use validator::ValidationError;

/// Rejects strings that are empty or whitespace only.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
