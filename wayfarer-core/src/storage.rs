use crate::error::Result;
use rusqlite::{Connection, OptionalExtension, params};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::debug;

/// Storage key the visited-state snapshot lives under
pub const SNAPSHOT_KEY: &str = "visited_places_v1";

/// A medium holding a single text snapshot.
///
/// `set` overwrites whatever was stored before. Implementations are
/// expected to write atomically per call.
pub trait SnapshotStorage {
    fn get(&self) -> Result<Option<String>>;
    fn set(&mut self, text: &str) -> Result<()>;
}

/// In-process storage. Clones share the same slot, so a caller can keep a
/// handle and inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(text: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(text.to_string()))),
        }
    }

    pub fn snapshot(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn set(&mut self, text: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

/// Plain JSON file storage, one file per key
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{}.json", SNAPSHOT_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for FileStorage {
    fn get(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn set(&mut self, text: &str) -> Result<()> {
        // Write beside the target then rename so readers never see half a file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Wrote snapshot to {}", self.path.display());
        Ok(())
    }
}

/// SQLite-backed key/value storage
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
            ",
        )?;

        let storage = SqliteStorage { conn };
        storage.init_schema()?;
        Ok(storage)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS snapshots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    /// Unix timestamp of the last write, if any
    pub fn updated_at(&self) -> Result<Option<i64>> {
        let updated = self
            .conn
            .query_row(
                "SELECT updated_at FROM snapshots WHERE key = ?1",
                params![SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(updated)
    }
}

impl SnapshotStorage for SqliteStorage {
    fn get(&self) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1",
                params![SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, text: &str) -> Result<()> {
        let timestamp = chrono::Utc::now().timestamp();
        self.conn.execute(
            "INSERT INTO snapshots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![SNAPSHOT_KEY, text, timestamp],
        )?;
        Ok(())
    }
}
