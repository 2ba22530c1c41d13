//! Builder for creating and configuring SQLite-backed preference stores.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::{PreferenceStore, SqliteSlot, PREFERENCES_KEY};
use crate::{
    db::Database,
    error::{Result, WayfarerError},
};

/// Builder for creating and configuring [`PreferenceStore`] instances.
#[derive(Debug, Clone)]
pub struct PreferenceStoreBuilder {
    database_path: Option<PathBuf>,
    slot_key: String,
}

impl PreferenceStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            slot_key: PREFERENCES_KEY.to_string(),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/wayfarer/wayfarer.db` or
    /// `~/.local/share/wayfarer/wayfarer.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the slot key the document is stored under.
    pub fn with_slot_key(mut self, key: impl Into<String>) -> Self {
        self.slot_key = key.into();
        self
    }

    /// Builds the store and performs its initial load.
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::FileSystem` if the database directory cannot be
    /// created, and `WayfarerError::Database` if schema initialization fails.
    /// A corrupt stored document is not an error; the store keeps defaults.
    pub async fn build(self) -> Result<PreferenceStore<SqliteSlot>> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| WayfarerError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), WayfarerError>(())
        })
        .await
        .map_err(WayfarerError::join)??;

        let store = PreferenceStore::with_key(SqliteSlot::new(db_path), self.slot_key);
        store.load().await;
        debug!("Preference store ready at {}", store.slot().path().display());
        Ok(store)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wayfarer")
            .place_data_file("wayfarer.db")
            .map_err(|e| WayfarerError::XdgDirectory(e.to_string()))
    }
}

impl Default for PreferenceStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
