use tempfile::TempDir;
use wayfarer_core::{
    itinerary::sample_itinerary, ActivityFields, ItineraryManager, ItineraryState,
    JsonFileSource, WayfarerError,
};

#[tokio::test]
async fn test_json_file_source_loads_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("trip.json");
    std::fs::write(
        &path,
        serde_json::to_string(&sample_itinerary()).expect("serialize"),
    )
    .expect("write itinerary");

    let mut manager = ItineraryManager::new(JsonFileSource::new(&path));
    manager.load_itinerary().await.expect("load");

    assert_eq!(manager.itinerary(), Some(&sample_itinerary()));
}

#[tokio::test]
async fn test_missing_file_is_empty_not_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut manager = ItineraryManager::new(JsonFileSource::new(temp_dir.path().join("none.json")));

    manager.load_itinerary().await.expect("missing file is not an error");
    assert_eq!(manager.state(), &ItineraryState::Empty);
}

#[tokio::test]
async fn test_invalid_file_is_fetch_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("trip.json");
    std::fs::write(&path, "[1, 2, 3]").expect("write");

    let mut manager = ItineraryManager::new(JsonFileSource::new(&path));
    let err = manager.load_itinerary().await.expect_err("invalid document");

    assert!(matches!(err, WayfarerError::Fetch { .. }));
    assert_eq!(manager.state(), &ItineraryState::Empty);
}

#[tokio::test]
async fn test_session_edits_do_not_touch_the_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("trip.json");
    let original = serde_json::to_string(&sample_itinerary()).expect("serialize");
    std::fs::write(&path, &original).expect("write");

    let mut manager = ItineraryManager::new(JsonFileSource::new(&path));
    manager.load_itinerary().await.expect("load");
    manager
        .add_activity(
            "2024-01-16",
            ActivityFields {
                time: "19:00".to_string(),
                title: "Night Market".to_string(),
                location: "Gianyar".to_string(),
                cost: 12.0,
                activity_type: "Food".to_string(),
                notes: None,
            },
        )
        .expect("day exists");
    manager.delete_activity("2024-01-15", "2").expect("activity exists");

    assert_eq!(std::fs::read_to_string(&path).expect("read"), original);
    let day = manager.day("2024-01-16").expect("day exists");
    assert_eq!(day.activities.len(), 2);
}
