//! Durable, merge-on-update preference store.
//!
//! The [`PreferenceStore`] owns the canonical [`Preferences`] document and
//! keeps it consistent with a [`DurableSlot`]. Every mutating operation is
//! durable-write-first:
//!
//! ```text
//! snapshot ──▶ merge ──▶ slot.write ──ok──▶ commit to memory
//!                              └──err──▶ memory untouched, PersistenceWrite
//! ```
//!
//! Mutations are serialised through a single writer lock held from snapshot
//! to commit, so two overlapping updates never merge against the same stale
//! snapshot.
//!
//! # Usage
//!
//! ```rust
//! use wayfarer_core::{
//!     params::NotificationsPatch,
//!     preferences::{MemorySlot, PreferenceStore},
//! };
//!
//! # async fn example() -> wayfarer_core::Result<()> {
//! let store = PreferenceStore::new(MemorySlot::new());
//! store.load().await;
//!
//! let updated = store
//!     .update_notification_settings(NotificationsPatch {
//!         deals: Some(false),
//!         ..Default::default()
//!     })
//!     .await?;
//! assert!(updated.notifications.price_alerts);
//! assert!(!updated.notifications.deals);
//! # Ok(())
//! # }
//! ```

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use log::{debug, error, warn};
use tokio::{
    sync::{watch, Mutex, RwLock},
    task,
};

use crate::{
    error::{Result, WayfarerError},
    models::Preferences,
    params::{FiltersPatch, NotificationsPatch, PreferencesPatch},
};

pub mod builder;
pub mod slot;

#[cfg(test)]
mod tests;

pub use builder::PreferenceStoreBuilder;
pub use slot::{DurableSlot, MemorySlot, SqliteSlot};

/// Slot key the preferences document is stored under.
pub const PREFERENCES_KEY: &str = "preferences";

/// Holds the preferences document and persists every change before applying it.
pub struct PreferenceStore<S: DurableSlot> {
    slot: Arc<S>,
    key: String,
    current: RwLock<Preferences>,
    writer: Mutex<()>,
    revision: AtomicU64,
    loading: watch::Sender<bool>,
}

impl<S: DurableSlot> PreferenceStore<S> {
    /// Creates a store over `slot` holding the default document.
    ///
    /// The store reports loading until [`load`](Self::load) completes.
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, PREFERENCES_KEY)
    }

    /// Creates a store persisting under a custom slot key.
    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        let (loading, _) = watch::channel(true);
        Self {
            slot: Arc::new(slot),
            key: key.into(),
            current: RwLock::new(Preferences::default()),
            writer: Mutex::new(()),
            revision: AtomicU64::new(0),
            loading,
        }
    }

    /// The slot this store persists into.
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Reads the durable slot into memory.
    ///
    /// An empty slot keeps the current document. Unreadable or unparseable
    /// content is logged and the current document is kept; no error reaches
    /// the caller. The loading signal is cleared in every case.
    pub async fn load(&self) {
        let _writer = self.writer.lock().await;

        match self.read_slot().await {
            Ok(Some(stored)) => {
                *self.current.write().await = stored;
                debug!("Loaded preferences from slot '{}'", self.key);
            }
            Ok(None) => debug!("No stored preferences in slot '{}', using defaults", self.key),
            Err(e) => warn!("Error loading preferences, keeping defaults: {e}"),
        }

        self.loading.send_replace(false);
    }

    /// Snapshot of the current document.
    pub async fn preferences(&self) -> Preferences {
        self.current.read().await.clone()
    }

    /// Number of commits since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    /// True until the initial load has finished.
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Receiver that observes the loading flag.
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Suspends until the initial load has finished.
    pub async fn wait_until_loaded(&self) {
        let mut receiver = self.loading.subscribe();
        // The sender lives as long as `self`, so this cannot observe a close.
        let _ = receiver.wait_for(|loading| !*loading).await;
    }

    /// Replaces every top-level key present in `patch`.
    ///
    /// Nested groups in the patch replace the stored group wholesale.
    pub async fn update_preferences(&self, patch: PreferencesPatch) -> Result<Preferences> {
        self.commit_with("saving preferences", |current| patch.apply_to(current))
            .await
    }

    /// Replaces individual keys inside `filters`, keeping the rest.
    pub async fn update_filters(&self, patch: FiltersPatch) -> Result<Preferences> {
        self.commit_with("updating filters", |current| Preferences {
            filters: patch.apply_to(&current.filters),
            ..current.clone()
        })
        .await
    }

    /// Replaces individual flags inside `notifications`, keeping the rest.
    pub async fn update_notification_settings(
        &self,
        patch: NotificationsPatch,
    ) -> Result<Preferences> {
        self.commit_with("updating notification settings", |current| Preferences {
            notifications: patch.apply_to(&current.notifications),
            ..current.clone()
        })
        .await
    }

    /// Persists the default document and then adopts it.
    pub async fn reset_preferences(&self) -> Result<Preferences> {
        self.commit_with("resetting preferences", |_| Preferences::default())
            .await
    }

    async fn commit_with<F>(&self, operation: &str, merge: F) -> Result<Preferences>
    where
        F: FnOnce(&Preferences) -> Preferences,
    {
        let _writer = self.writer.lock().await;

        let merged = {
            let current = self.current.read().await;
            merge(&current)
        };

        if let Err(source) = self.write_slot(&merged).await {
            error!("Error {operation}: {source}");
            return Err(WayfarerError::persistence_write(&self.key, source));
        }

        *self.current.write().await = merged.clone();
        let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Committed preferences revision {revision} ({operation})");

        Ok(merged)
    }

    async fn read_slot(&self) -> Result<Option<Preferences>> {
        let slot = Arc::clone(&self.slot);
        let key = self.key.clone();

        let raw = task::spawn_blocking(move || slot.read(&key))
            .await
            .map_err(WayfarerError::join)
            .and_then(|read| read)
            .map_err(|e| WayfarerError::persistence_read(&self.key, e))?;

        match raw {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| WayfarerError::persistence_read(&self.key, e.into())),
            None => Ok(None),
        }
    }

    async fn write_slot(&self, document: &Preferences) -> Result<()> {
        let encoded = serde_json::to_string(document)?;
        let slot = Arc::clone(&self.slot);
        let key = self.key.clone();

        task::spawn_blocking(move || slot.write(&key, &encoded))
            .await
            .map_err(WayfarerError::join)?
    }
}
