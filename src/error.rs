//! HTTP-facing error type.
//!
//! Every handler returns `Result<_, AppError>`. Bodies are flat JSON objects:
//! `{"error": "..."}`, plus `"details"` for server errors. Extractor rejections
//! use the same shape. Provider errors from the contact relay keep the
//! provider's status code and carry its payload.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use validator::ValidationErrors;

/// Message returned for any missing or blank required field.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    NotFound { message: String },
    Internal { message: String, details: Option<String> },
    /// Upstream failure relayed with the upstream status code and a prebuilt JSON body.
    Upstream { status: StatusCode, body: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            details: Some(details.into()),
        }
    }
    pub fn upstream(status: StatusCode, body: Value) -> Self {
        Self::Upstream { status, body }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream { status, .. } => *status,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message } | AppError::NotFound { message } => {
                f.write_str(message)
            }
            AppError::Internal {
                message,
                details: Some(details),
            } => write!(f, "{message}: {details}"),
            AppError::Internal { message, .. } => f.write_str(message),
            AppError::Upstream { status, .. } => write!(f, "upstream error {status}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationErrors> for AppError {
    fn from(_: ValidationErrors) -> Self {
        AppError::bad_request(MISSING_FIELDS_MESSAGE)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::Upstream { body, .. } => return (status, Json(body)).into_response(),
            AppError::Validation { message } | AppError::NotFound { message } => ErrorBody {
                error: message,
                details: None,
            },
            AppError::Internal { message, details } => ErrorBody {
                error: message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
