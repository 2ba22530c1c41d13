//! Slot read/write queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_SLOT_SQL: &str = "SELECT value FROM slots WHERE key = ?1";
const SELECT_SLOT_REVISION_SQL: &str = "SELECT revision FROM slots WHERE key = ?1";
const UPSERT_SLOT_SQL: &str = "INSERT INTO slots (key, value, updated_at, revision) VALUES (?1, ?2, ?3, 1)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at, revision = slots.revision + 1";

impl super::Database {
    /// Reads the raw value stored under `key`.
    pub fn get_slot(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SLOT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query slot")
    }

    /// Number of writes the slot under `key` has received.
    pub fn slot_revision(&self, key: &str) -> Result<Option<u64>> {
        let revision: Option<i64> = self
            .connection
            .query_row(SELECT_SLOT_REVISION_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query slot revision")?;
        Ok(revision.map(|r| r as u64))
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn put_slot(&mut self, key: &str, value: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        tx.execute(UPSERT_SLOT_SQL, params![key, value, &now])
            .db_context("Failed to write slot")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
