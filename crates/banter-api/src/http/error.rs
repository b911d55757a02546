//! Application error type mapping to HTTP status codes.
//!
//! Every error body has the shape `{"error": "<message>"}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use banter_types::error::ValidationError;

/// Prefix of every 500 message.
pub const INTERNAL_ERROR_PREFIX: &str = "Internal Server Error: ";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Bad or missing client input.
    Validation(ValidationError),
    /// Unexpected fault while handling the request.
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(ValidationError::MalformedBody(rejection.body_text()))
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::Internal(msg) => format!("{INTERNAL_ERROR_PREFIX}{msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.message(), "request failed");
        } else {
            tracing::info!(error = %self.message(), "request rejected");
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
