use tempfile::TempDir;
use wayfarer_core::{PreferenceStore, PreferenceStoreBuilder, SqliteSlot};

/// Helper function to create a test store over a fresh database
pub async fn create_test_store() -> (TempDir, PreferenceStore<SqliteSlot>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = PreferenceStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create preference store");
    (temp_dir, store)
}
