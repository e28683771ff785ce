//! Common error types for the DreamCraft service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Longest store diagnostic surfaced to clients
pub const MAX_DIAGNOSTIC_CHARS: usize = 80;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Database not available: {0}")]
    StoreUnavailable(String),
}

impl AppError {
    /// Wrap a failed store write, keeping only a short diagnostic
    pub fn store_unavailable(err: &StoreError) -> Self {
        AppError::StoreUnavailable(truncate_chars(&err.to_string(), MAX_DIAGNOSTIC_CHARS))
    }
}

/// Truncate to at most `max` characters without splitting a code point
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Error response format
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub r#type: String,
    pub code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, code) = match &self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "server_error", None),
            AppError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "invalid_request_error",
                Some("validation_failed"),
            ),
            AppError::StoreUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "server_error",
                Some("store_unavailable"),
            ),
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                message: self.to_string(),
                r#type: error_type.to_string(),
                code: code.map(|c| c.to_string()),
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
