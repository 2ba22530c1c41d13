//! Tests for the preferences module.

use std::{collections::BTreeSet, sync::Arc};

use super::*;
use crate::models::{Currency, DisplayPreferences, Filters, NotificationSettings};

fn stored_json(prefs: &Preferences) -> String {
    serde_json::to_string(prefs).expect("serialize preferences")
}

async fn loaded_store() -> PreferenceStore<MemorySlot> {
    let store = PreferenceStore::new(MemorySlot::new());
    store.load().await;
    store
}

#[tokio::test]
async fn test_new_store_reports_loading_until_load_completes() {
    let store = PreferenceStore::new(MemorySlot::new());
    assert!(store.is_loading());
    assert_eq!(store.preferences().await, Preferences::default());

    store.load().await;
    assert!(!store.is_loading());
    assert_eq!(store.preferences().await, Preferences::default());
}

#[tokio::test]
async fn test_load_adopts_stored_document() {
    let mut stored = Preferences::default();
    stored.currency = Currency::Gbp;
    stored.language = "de".to_string();
    stored.display_preferences.dark_mode = true;

    let store = PreferenceStore::new(MemorySlot::with_entry(
        PREFERENCES_KEY,
        stored_json(&stored),
    ));
    store.load().await;

    assert_eq!(store.preferences().await, stored);
    assert_eq!(store.revision(), 0);
}

#[tokio::test]
async fn test_load_corrupt_slot_keeps_defaults() {
    let store = PreferenceStore::new(MemorySlot::with_entry(PREFERENCES_KEY, "{not json"));
    store.load().await;

    assert!(!store.is_loading());
    assert_eq!(store.preferences().await, Preferences::default());
}

#[tokio::test]
async fn test_load_partial_document_keeps_defaults() {
    let store = PreferenceStore::new(MemorySlot::with_entry(
        PREFERENCES_KEY,
        r#"{"currency":"EUR","language":"es"}"#,
    ));
    store.load().await;

    assert_eq!(store.preferences().await, Preferences::default());
}

#[tokio::test]
async fn test_custom_key_reads_only_its_slot() {
    let mut stored = Preferences::default();
    stored.currency = Currency::Aud;

    let store = PreferenceStore::with_key(
        MemorySlot::with_entry(PREFERENCES_KEY, stored_json(&stored)),
        "guest-preferences",
    );
    store.load().await;
    assert_eq!(store.preferences().await.currency, Currency::Usd);

    store
        .update_preferences(PreferencesPatch {
            language: Some("it".to_string()),
            ..Default::default()
        })
        .await
        .expect("update");
    assert!(store.slot().raw("guest-preferences").is_some());
    assert_eq!(
        store.slot().raw(PREFERENCES_KEY),
        Some(stored_json(&stored))
    );
}

#[tokio::test]
async fn test_update_preferences_replaces_present_keys_only() {
    let store = loaded_store().await;
    let before = store.preferences().await;

    let merged = store
        .update_preferences(PreferencesPatch {
            currency: Some(Currency::Eur),
            language: Some("fr".to_string()),
            ..Default::default()
        })
        .await
        .expect("update");

    assert_eq!(merged.currency, Currency::Eur);
    assert_eq!(merged.language, "fr");
    assert_eq!(merged.filters, before.filters);
    assert_eq!(merged.notifications, before.notifications);
    assert_eq!(merged.display_preferences, before.display_preferences);
    assert_eq!(store.preferences().await, merged);
    assert_eq!(store.slot().raw(PREFERENCES_KEY), Some(stored_json(&merged)));
}

#[tokio::test]
async fn test_update_preferences_replaces_nested_group_without_merging() {
    let store = loaded_store().await;
    store
        .update_filters(FiltersPatch {
            climate: Some(BTreeSet::from(["tropical".to_string()])),
            safety_rating: Some(4.0),
            ..Default::default()
        })
        .await
        .expect("seed filters");

    let replacement = Filters {
        max_distance: Some(800.0),
        ..Filters::default()
    };
    let merged = store
        .update_preferences(PreferencesPatch {
            filters: Some(replacement.clone()),
            notifications: Some(NotificationSettings {
                price_alerts: false,
                trip_reminders: false,
                deals: false,
            }),
            ..Default::default()
        })
        .await
        .expect("update");

    assert_eq!(merged.filters, replacement);
    assert!(merged.filters.climate.is_empty());
    assert_eq!(merged.filters.safety_rating, 0.0);
    assert!(!merged.notifications.price_alerts);
}

#[tokio::test]
async fn test_update_filters_merges_one_level_deep() {
    let store = loaded_store().await;
    store
        .update_preferences(PreferencesPatch {
            currency: Some(Currency::Jpy),
            ..Default::default()
        })
        .await
        .expect("seed currency");
    store
        .update_filters(FiltersPatch {
            activity_types: Some(BTreeSet::from(["Adventure".to_string()])),
            visa_required: Some(Some(false)),
            ..Default::default()
        })
        .await
        .expect("seed filters");

    let merged = store
        .update_filters(FiltersPatch {
            safety_rating: Some(3.0),
            ..Default::default()
        })
        .await
        .expect("update filters");

    assert_eq!(merged.filters.safety_rating, 3.0);
    assert!(merged.filters.activity_types.contains("Adventure"));
    assert_eq!(merged.filters.visa_required, Some(false));
    assert_eq!(merged.currency, Currency::Jpy);
    assert_eq!(merged.notifications, NotificationSettings::default());
}

#[tokio::test]
async fn test_update_notification_settings_scenario() {
    let store = loaded_store().await;

    let merged = store
        .update_notification_settings(NotificationsPatch {
            deals: Some(false),
            ..Default::default()
        })
        .await
        .expect("update notifications");

    assert_eq!(
        merged.notifications,
        NotificationSettings {
            price_alerts: true,
            trip_reminders: true,
            deals: false,
        }
    );
    assert_eq!(merged.currency, Currency::Usd);
    assert_eq!(merged.filters, Filters::default());
}

#[tokio::test]
async fn test_failed_write_leaves_document_unchanged() {
    let store = loaded_store().await;
    store
        .update_preferences(PreferencesPatch {
            currency: Some(Currency::Eur),
            ..Default::default()
        })
        .await
        .expect("seed");
    let before = store.preferences().await;
    let stored_before = store.slot().raw(PREFERENCES_KEY);
    let revision_before = store.revision();

    store.slot().set_fail_writes(true);

    let err = store
        .update_preferences(PreferencesPatch {
            language: Some("ja".to_string()),
            ..Default::default()
        })
        .await
        .expect_err("write should fail");
    assert!(err.is_persistence_write());

    let err = store
        .update_filters(FiltersPatch {
            safety_rating: Some(5.0),
            ..Default::default()
        })
        .await
        .expect_err("write should fail");
    assert!(err.is_persistence_write());

    let err = store
        .update_notification_settings(NotificationsPatch {
            price_alerts: Some(false),
            ..Default::default()
        })
        .await
        .expect_err("write should fail");
    assert!(err.is_persistence_write());

    let err = store
        .reset_preferences()
        .await
        .expect_err("write should fail");
    assert!(err.is_persistence_write());

    assert_eq!(store.preferences().await, before);
    assert_eq!(store.slot().raw(PREFERENCES_KEY), stored_before);
    assert_eq!(store.revision(), revision_before);
}

#[tokio::test]
async fn test_writes_succeed_again_after_failure_clears() {
    let store = loaded_store().await;
    store.slot().set_fail_writes(true);
    assert!(store
        .update_preferences(PreferencesPatch {
            display_preferences: Some(DisplayPreferences {
                dark_mode: true,
                high_contrast: true,
            }),
            ..Default::default()
        })
        .await
        .is_err());

    store.slot().set_fail_writes(false);
    let merged = store
        .update_preferences(PreferencesPatch {
            display_preferences: Some(DisplayPreferences {
                dark_mode: true,
                high_contrast: true,
            }),
            ..Default::default()
        })
        .await
        .expect("update");
    assert!(merged.display_preferences.dark_mode);
    assert_eq!(store.revision(), 1);
}

#[tokio::test]
async fn test_reset_then_restart_yields_defaults() {
    let store = loaded_store().await;
    store
        .update_preferences(PreferencesPatch {
            currency: Some(Currency::Aud),
            language: Some("pt".to_string()),
            ..Default::default()
        })
        .await
        .expect("update");

    let reset = store.reset_preferences().await.expect("reset");
    assert_eq!(reset, Preferences::default());

    let raw = store
        .slot()
        .raw(PREFERENCES_KEY)
        .expect("reset persists the defaults");
    let restarted = PreferenceStore::new(MemorySlot::with_entry(PREFERENCES_KEY, raw));
    restarted.load().await;
    assert_eq!(restarted.preferences().await, Preferences::default());
}

#[tokio::test]
async fn test_wait_until_loaded_resolves_after_load() {
    let store = Arc::new(PreferenceStore::new(MemorySlot::new()));
    let mut loading = store.subscribe_loading();
    assert!(*loading.borrow());

    let waiter = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            store.wait_until_loaded().await;
            store.is_loading()
        })
    };

    store.load().await;
    assert!(!waiter.await.expect("join"));
    loading.changed().await.expect("loading signal changed");
    assert!(!*loading.borrow());
}

#[tokio::test]
async fn test_overlapping_filter_updates_do_not_lose_writes() {
    let store = Arc::new(loaded_store().await);

    let climate = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            store
                .update_filters(FiltersPatch {
                    climate: Some(BTreeSet::from(["alpine".to_string()])),
                    ..Default::default()
                })
                .await
        })
    };
    let rating = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            store
                .update_filters(FiltersPatch {
                    safety_rating: Some(2.5),
                    ..Default::default()
                })
                .await
        })
    };

    climate.await.expect("join").expect("climate update");
    rating.await.expect("join").expect("rating update");

    let filters = store.preferences().await.filters;
    assert!(filters.climate.contains("alpine"));
    assert_eq!(filters.safety_rating, 2.5);
    assert_eq!(store.revision(), 2);
}
