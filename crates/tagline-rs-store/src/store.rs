//! Store abstraction shared by the generation service and history queries.

use crate::StoreError;
use tagline_rs_protocol::{ProductMetadata, TaglineRecord};

/// Append-only tagline persistence.
///
/// Calls are synchronous; async callers run them on a blocking worker.
pub trait TaglineStore: Send + Sync {
    /// Persist one record per tagline, in input order, each sharing `metadata`.
    ///
    /// An empty `taglines` slice creates nothing.
    fn append(&self, metadata: &ProductMetadata, taglines: &[String]) -> Result<(), StoreError>;

    /// Every stored record, newest (highest id) first.
    fn list_history(&self) -> Result<Vec<TaglineRecord>, StoreError>;
}
