//! Error types for tagline storage.

/// Errors returned by tagline stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error while preparing the database location.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// SQLite error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// The blocking worker running the store call failed.
    #[error("store worker failed: {0}")]
    Worker(String),
}
