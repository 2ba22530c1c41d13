//! Upstream sources an itinerary is loaded from.

use std::{
    future::Future,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    error::{Result, WayfarerError},
    models::{Activity, Day, Itinerary},
};

/// Asynchronous provider of a whole itinerary document.
///
/// `Ok(None)` means the source has nothing for this traveller, which the
/// manager reports as [`ItineraryState::Empty`](super::ItineraryState::Empty).
pub trait ItinerarySource {
    /// Fetches the full document.
    fn fetch(&self) -> impl Future<Output = Result<Option<Itinerary>>> + Send;
}

/// Fixed document (or nothing) returned after a delay.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    itinerary: Option<Itinerary>,
    delay: Duration,
}

impl FixtureSource {
    /// Delay the sample source waits before answering.
    pub const SAMPLE_DELAY: Duration = Duration::from_secs(1);

    /// Source that yields `itinerary` immediately.
    pub fn new(itinerary: Itinerary) -> Self {
        Self {
            itinerary: Some(itinerary),
            delay: Duration::ZERO,
        }
    }

    /// Source that yields nothing.
    pub fn empty() -> Self {
        Self {
            itinerary: None,
            delay: Duration::ZERO,
        }
    }

    /// The five-day Bali trip, answered after [`Self::SAMPLE_DELAY`].
    pub fn sample() -> Self {
        Self {
            itinerary: Some(sample_itinerary()),
            delay: Self::SAMPLE_DELAY,
        }
    }

    /// Overrides the response delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl ItinerarySource for FixtureSource {
    fn fetch(&self) -> impl Future<Output = Result<Option<Itinerary>>> + Send {
        let itinerary = self.itinerary.clone();
        let delay = self.delay;
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Ok(itinerary)
        }
    }
}

/// Itinerary stored as a JSON file. A missing file yields nothing.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ItinerarySource for JsonFileSource {
    fn fetch(&self) -> impl Future<Output = Result<Option<Itinerary>>> + Send {
        let path = self.path.clone();
        async move {
            let text = match tokio::fs::read_to_string(&path).await {
                Ok(text) => text,
                Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
                Err(e) => return Err(WayfarerError::FileSystem { path, source: e }),
            };

            serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| WayfarerError::Fetch {
                    message: format!("invalid itinerary in '{}': {e}", path.display()),
                })
        }
    }
}

fn sample_activity(
    id: &str,
    time: &str,
    title: &str,
    location: &str,
    cost: f64,
    activity_type: &str,
    notes: &str,
) -> Activity {
    Activity {
        id: id.to_string(),
        time: time.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        cost,
        activity_type: activity_type.to_string(),
        notes: Some(notes.to_string()),
    }
}

/// The sample trip shown on the itinerary screen.
pub fn sample_itinerary() -> Itinerary {
    Itinerary {
        destination_name: "Bali, Indonesia".to_string(),
        start_date: "2024-01-15".to_string(),
        end_date: "2024-01-20".to_string(),
        days: vec![
            Day {
                date: "2024-01-15".to_string(),
                activities: vec![
                    sample_activity(
                        "1",
                        "09:00",
                        "Temple Visit",
                        "Tanah Lot Temple",
                        25.0,
                        "Cultural",
                        "Bring camera and modest clothing",
                    ),
                    sample_activity(
                        "2",
                        "14:00",
                        "Beach Relaxation",
                        "Nusa Dua Beach",
                        0.0,
                        "Leisure",
                        "Don't forget sunscreen",
                    ),
                ],
            },
            Day {
                date: "2024-01-16".to_string(),
                activities: vec![sample_activity(
                    "3",
                    "10:00",
                    "Cooking Class",
                    "Ubud Cooking School",
                    45.0,
                    "Cultural",
                    "Vegetarian options available",
                )],
            },
        ],
    }
}
