//! Error types for the HTTP surface.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::warn;
use tagline_rs_core::{GenerateError, HistoryError};
use tagline_rs_protocol::ErrorResponse;
use thiserror::Error;

/// Body message for any failed generation past validation.
pub const GENERATION_FAILED: &str = "Failed to generate taglines";
/// Body message for a failed history read.
pub const HISTORY_FAILED: &str = "Failed to load history";

/// Errors returned while running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Binding the listener failed.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    /// The accept loop failed.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Request-level failure mapped onto an HTTP response.
///
/// Upstream and storage details are logged by the service and never echoed
/// back to clients.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or invalid request body.
    BadRequest(String),
    /// Provider or store failure while generating.
    GenerationFailed,
    /// Store failure while reading history.
    HistoryFailed,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("rejected request body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<GenerateError> for ApiError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Validation(err) => ApiError::BadRequest(err.to_string()),
            GenerateError::Upstream(_) | GenerateError::Storage(_) => ApiError::GenerationFailed,
        }
    }
}

impl From<HistoryError> for ApiError {
    fn from(_: HistoryError) -> Self {
        ApiError::HistoryFailed
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::GenerationFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED.to_string())
            }
            ApiError::HistoryFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, HISTORY_FAILED.to_string())
            }
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
