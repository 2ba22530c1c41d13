mod common;

use std::collections::BTreeSet;

use common::create_test_store;
use wayfarer_core::{
    Currency, Database, FiltersPatch, NotificationsPatch, PreferenceStoreBuilder, Preferences,
    PreferencesPatch,
};

#[tokio::test]
async fn test_fresh_database_yields_defaults() {
    let (_temp_dir, store) = create_test_store().await;

    assert!(!store.is_loading());
    assert_eq!(store.preferences().await, Preferences::default());
}

#[tokio::test]
async fn test_builder_creates_nested_database_directory() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("prefs.db");

    let store = PreferenceStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create preference store");

    assert_eq!(store.slot().path(), db_path.as_path());
    assert!(db_path.exists());
}

#[tokio::test]
async fn test_updates_survive_restart() {
    let (temp_dir, store) = create_test_store().await;
    let db_path = temp_dir.path().join("test.db");

    store
        .update_preferences(PreferencesPatch {
            currency: Some(Currency::Gbp),
            ..Default::default()
        })
        .await
        .expect("update preferences");
    store
        .update_filters(FiltersPatch {
            climate: Some(BTreeSet::from(["temperate".to_string()])),
            max_distance: Some(Some(2500.0)),
            ..Default::default()
        })
        .await
        .expect("update filters");
    let committed = store
        .update_notification_settings(NotificationsPatch {
            trip_reminders: Some(false),
            ..Default::default()
        })
        .await
        .expect("update notifications");
    drop(store);

    let restarted = PreferenceStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("reopen store");
    let reloaded = restarted.preferences().await;

    assert_eq!(reloaded, committed);
    assert_eq!(reloaded.currency, Currency::Gbp);
    assert!(reloaded.filters.climate.contains("temperate"));
    assert!(!reloaded.notifications.trip_reminders);
    assert!(reloaded.notifications.deals);
}

#[tokio::test]
async fn test_reset_survives_restart() {
    let (temp_dir, store) = create_test_store().await;
    let db_path = temp_dir.path().join("test.db");

    store
        .update_preferences(PreferencesPatch {
            language: Some("ja".to_string()),
            ..Default::default()
        })
        .await
        .expect("update");
    store.reset_preferences().await.expect("reset");
    drop(store);

    let restarted = PreferenceStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("reopen store");
    assert_eq!(restarted.preferences().await, Preferences::default());
}

#[tokio::test]
async fn test_corrupt_stored_document_falls_back_to_defaults() {
    let (temp_dir, store) = create_test_store().await;
    let db_path = temp_dir.path().join("test.db");
    drop(store);

    let mut db = Database::new(&db_path).expect("open database");
    db.put_slot("preferences", "{\"currency\": \"USD\"")
        .expect("write corrupt value");
    drop(db);

    let restarted = PreferenceStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("corruption is not a build error");
    assert!(!restarted.is_loading());
    assert_eq!(restarted.preferences().await, Preferences::default());
}

#[tokio::test]
async fn test_each_commit_writes_the_slot_once() {
    let (temp_dir, store) = create_test_store().await;
    let db_path = temp_dir.path().join("test.db");

    store
        .update_notification_settings(NotificationsPatch {
            deals: Some(false),
            ..Default::default()
        })
        .await
        .expect("update");
    store.reset_preferences().await.expect("reset");

    let db = Database::new(&db_path).expect("open database");
    assert_eq!(db.slot_revision("preferences").expect("query"), Some(2));
    assert_eq!(store.revision(), 2);
}

#[tokio::test]
async fn test_builder_slot_key_isolates_documents() {
    let (temp_dir, store) = create_test_store().await;
    let db_path = temp_dir.path().join("test.db");
    store
        .update_preferences(PreferencesPatch {
            currency: Some(Currency::Eur),
            ..Default::default()
        })
        .await
        .expect("update");

    let guest = PreferenceStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .with_slot_key("guest")
        .build()
        .await
        .expect("open guest store");
    assert_eq!(guest.preferences().await.currency, Currency::Usd);
}
