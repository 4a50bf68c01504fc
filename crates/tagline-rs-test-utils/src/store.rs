use std::io;
use std::sync::Arc;
use tagline_rs_protocol::{ProductMetadata, TaglineRecord};
use tagline_rs_store::{SqliteTaglineStore, StoreError, TaglineStore};

/// Fresh in-memory SQLite store.
pub fn in_memory_store() -> Arc<SqliteTaglineStore> {
    Arc::new(SqliteTaglineStore::in_memory().expect("in-memory store"))
}

/// Store whose writes and/or reads fail with an IO error.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore {
    fail_writes: bool,
    fail_reads: bool,
}

impl FailingStore {
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            fail_reads: false,
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_writes: false,
            fail_reads: true,
        }
    }

    fn error(operation: &str) -> StoreError {
        StoreError::Io(io::Error::other(format!("{operation} failed: disk unavailable")))
    }
}

impl TaglineStore for FailingStore {
    fn append(&self, _metadata: &ProductMetadata, _taglines: &[String]) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(Self::error("append"));
        }
        Ok(())
    }

    fn list_history(&self) -> Result<Vec<TaglineRecord>, StoreError> {
        if self.fail_reads {
            return Err(Self::error("list"));
        }
        Ok(Vec::new())
    }
}
