//! SQLite-backed tagline store.

use crate::error::StoreError;
use crate::store::TaglineStore;
use log::{debug, info};
use parking_lot::Mutex;
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use tagline_rs_protocol::{ProductMetadata, TaglineRecord};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS taglines (\
    id INTEGER PRIMARY KEY AUTOINCREMENT,\
    name TEXT NOT NULL,\
    description TEXT NOT NULL,\
    audience TEXT NOT NULL,\
    tone TEXT NOT NULL,\
    tagline TEXT NOT NULL\
)";

const INSERT_TAGLINE: &str =
    "INSERT INTO taglines (name, description, audience, tone, tagline) VALUES (?1, ?2, ?3, ?4, ?5)";

const SELECT_HISTORY: &str =
    "SELECT id, name, description, audience, tone, tagline FROM taglines ORDER BY id DESC";

/// Tagline store over a single SQLite connection.
///
/// The connection is owned by the store and locked for the duration of
/// each call.
#[derive(Debug)]
pub struct SqliteTaglineStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteTaglineStore {
    /// Open (or create) the database file and ensure the table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000;")?;
        conn.execute_batch(CREATE_TABLE)?;
        info!("opened tagline store (path={})", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Create a store backed by a private in-memory database.
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(CREATE_TABLE)?;
        debug!("opened in-memory tagline store");
        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Database file path, or `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl TaglineStore for SqliteTaglineStore {
    /// Insert all taglines inside one transaction.
    fn append(&self, metadata: &ProductMetadata, taglines: &[String]) -> Result<(), StoreError> {
        if taglines.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(INSERT_TAGLINE)?;
            for tagline in taglines {
                stmt.execute(params![
                    metadata.name,
                    metadata.description,
                    metadata.audience,
                    metadata.tone.as_str(),
                    tagline,
                ])?;
            }
        }
        tx.commit()?;
        debug!(
            "stored taglines (name_len={}, tone={}, count={})",
            metadata.name.len(),
            metadata.tone,
            taglines.len()
        );
        Ok(())
    }

    fn list_history(&self) -> Result<Vec<TaglineRecord>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(SELECT_HISTORY)?;
        let records = stmt
            .query_map([], |row| {
                Ok(TaglineRecord {
                    id: row.get(0)?,
                    product_name: row.get(1)?,
                    description: row.get(2)?,
                    audience: row.get(3)?,
                    tone: row.get(4)?,
                    tagline: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        debug!("loaded tagline history (records={})", records.len());
        Ok(records)
    }
}
