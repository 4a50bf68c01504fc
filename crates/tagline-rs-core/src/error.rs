//! Error types for the tagline generation core.

use tagline_rs_protocol::ValidationError;
use tagline_rs_store::StoreError;
use thiserror::Error;

/// Errors returned by completion providers.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Upstream answered with a non-success status.
    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },
    /// Upstream answered 2xx but the body did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Errors returned by a generation request.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Request was rejected before contacting the provider.
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),
    /// Completion provider failed.
    #[error("upstream error: {0}")]
    Upstream(#[from] ProviderError),
    /// Persisting the generated taglines failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Errors returned while reading history.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Reading from the store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Errors returned while wiring a service from config.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Provider client could not be built.
    #[error("provider setup failed: {0}")]
    Provider(#[from] ProviderError),
    /// Store could not be opened.
    #[error("store setup failed: {0}")]
    Store(#[from] StoreError),
}
