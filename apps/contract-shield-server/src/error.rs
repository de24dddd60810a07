//! Error types for the Contract Shield server

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use text_extract::ExtractError;
use thiserror::Error;

pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Unsupported file type. Please upload PDF or DOCX files only.";

pub const INSUFFICIENT_TEXT_MESSAGE: &str =
    "Could not extract sufficient text from the file. Please ensure the file is not corrupted.";

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Insufficient text extracted ({0} characters)")]
    InsufficientText(usize),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Error processing file: {0}")]
    Processing(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServerError::UnsupportedFormat(_) => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_FORMAT",
                UNSUPPORTED_FORMAT_MESSAGE.to_string(),
            ),
            ServerError::InsufficientText(_) => (
                StatusCode::BAD_REQUEST,
                "INSUFFICIENT_TEXT",
                INSUFFICIENT_TEXT_MESSAGE.to_string(),
            ),
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            ServerError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            ServerError::Processing(msg) => {
                tracing::error!("Processing error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PROCESSING_ERROR",
                    format!("Error processing file: {}", msg),
                )
            }
        };

        let body = ErrorResponse {
            detail: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ExtractError> for ServerError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat(name) => ServerError::UnsupportedFormat(name),
            ExtractError::InsufficientText { found } => ServerError::InsufficientText(found),
            other => ServerError::Processing(other.to_string()),
        }
    }
}

impl From<MultipartError> for ServerError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(err.body_text())
        } else {
            ServerError::InvalidRequest(err.body_text())
        }
    }
}
