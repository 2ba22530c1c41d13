//! Durable key-value slots the preference store persists into.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};

use crate::{
    db::Database,
    error::{Result, WayfarerError},
};

/// A named, durable text slot.
///
/// Implementations are synchronous; the store drives them from a blocking
/// task so async callers are suspended rather than the runtime thread.
pub trait DurableSlot: Send + Sync + 'static {
    /// Reads the value under `key`, `None` when the slot is empty.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key`. Must not return `Ok` unless the value
    /// is durable.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Slot backed by the SQLite `slots` table.
///
/// Opens a fresh connection per call, so the slot itself holds only the path.
#[derive(Debug, Clone)]
pub struct SqliteSlot {
    db_path: PathBuf,
}

impl SqliteSlot {
    /// Creates a slot over the database at `db_path`.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

impl DurableSlot for SqliteSlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Database::new(&self.db_path)?.get_slot(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        Database::new(&self.db_path)?.put_slot(key, value)
    }
}

/// In-process slot for tests and embedders without a filesystem.
///
/// Writes can be made to fail on demand to exercise write-then-commit paths.
#[derive(Debug, Default)]
pub struct MemorySlot {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemorySlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot already holding `value` under `key`.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let slot = Self::new();
        if let Ok(mut entries) = slot.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        slot
    }

    /// Makes subsequent writes fail (`true`) or succeed (`false`).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw value under `key`, bypassing the store.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn poisoned() -> WayfarerError {
        WayfarerError::Configuration {
            message: "memory slot lock poisoned".to_string(),
        }
    }
}

impl DurableSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| Self::poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(WayfarerError::FileSystem {
                path: PathBuf::from(key),
                source: std::io::Error::other("simulated write failure"),
            });
        }
        let mut entries = self.entries.lock().map_err(|_| Self::poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
