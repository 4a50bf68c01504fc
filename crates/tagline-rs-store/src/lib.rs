//! Tagline persistence for generated taglines and their history.

pub mod error;
pub mod sqlite;
pub mod store;

/// Store error type.
pub use error::StoreError;
/// SQLite-backed store.
pub use sqlite::SqliteTaglineStore;
/// Store interface.
pub use store::TaglineStore;
