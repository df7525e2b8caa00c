//! Error handling module
//!
//! Defines error types and handling logic used in the project

use axum::{
    extract::rejection::StringRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Request validation failed
    #[error("Request validation failed: {0}")]
    Validation(String),

    /// A field the target call cannot do without is absent from the input.
    /// The message is shown to the caller as-is.
    #[error("{0}")]
    MissingField(String),

    /// Translation failed
    #[error("Translation failed: {0}")]
    Translation(String),

    /// Payload too large
    #[error("Payload too large")]
    PayloadTooLarge,
}

/// Error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`, so error bodies line up with failure descriptors
    pub success: bool,
    /// Error type
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message
    pub error: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Serialization(_) | AppError::Translation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(_) | AppError::PayloadTooLarge => "invalid_request_error",
            AppError::MissingField(_) => "missing_field_error",
            AppError::Translation(_) => "translation_error",
            AppError::Serialization(_) => "api_error",
        }
    }

    /// Whether detailed error information should be logged
    pub fn should_log_details(&self) -> bool {
        !matches!(
            self,
            AppError::Validation(_) | AppError::MissingField(_) | AppError::PayloadTooLarge
        )
    }

    /// Message placed into a failure descriptor for `operation`.
    ///
    /// Missing-field errors are already phrased for the caller; anything else
    /// is an unexpected fault and gets the operation name as context.
    pub fn failure_message(&self, operation: &str) -> String {
        match self {
            AppError::MissingField(message) => message.clone(),
            other => format!("Error while processing {}: {}", operation, other),
        }
    }

    /// Convert to the JSON error body
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            success: false,
            error_type: self.error_type().to_string(),
            error: self.to_string(),
        }
    }
}

/// Body extraction failures: an exceeded input limit becomes 413, anything
/// else (non UTF-8 text, aborted upload) is a rejected request
impl From<StringRejection> for AppError {
    fn from(rejection: StringRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::Validation(rejection.body_text())
        }
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.should_log_details() {
            tracing::error!("Application error: {} - Status code: {}", self, status);
        } else {
            tracing::warn!("Client error: {} - Status code: {}", self.error_type(), status);
        }

        (status, Json(self.to_error_response())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Error handling helper functions
pub mod helpers {
    use super::*;

    /// Create missing-field error
    pub fn missing_field_error(message: impl Into<String>) -> AppError {
        AppError::MissingField(message.into())
    }
}

/// Error context extension trait
pub trait ErrorContext<T> {
    /// Add translation error context
    fn translation_context(self, message: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn translation_context(self, message: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Translation(format!("{}: {}", message, e)))
    }
}
