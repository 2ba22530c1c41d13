//! Core library for the wayfarer trip planner.
//!
//! This crate holds the two stateful pieces behind the trip-planning screens:
//!
//! - [`preferences::PreferenceStore`]: the traveller's settings, persisted to
//!   a durable key-value slot with write-then-commit semantics.
//! - [`itinerary::ItineraryManager`]: a session-scoped itinerary document of
//!   days and activities, edited in memory.
//!
//! Both are plain owned values. The composition root creates them and hands
//! out references; there is no ambient global state.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wayfarer_core::{
//!     itinerary::{FixtureSource, ItineraryManager},
//!     params::{FiltersPatch, PreferencesPatch},
//!     Currency, PreferenceStoreBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PreferenceStoreBuilder::new()
//!     .with_database_path(Some("wayfarer.db"))
//!     .build()
//!     .await?;
//!
//! store
//!     .update_preferences(PreferencesPatch {
//!         currency: Some(Currency::Eur),
//!         ..Default::default()
//!     })
//!     .await?;
//! store
//!     .update_filters(FiltersPatch {
//!         safety_rating: Some(3.0),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{}", store.preferences().await);
//!
//! let mut trip = ItineraryManager::new(FixtureSource::sample());
//! trip.load_itinerary().await?;
//! if let Some(itinerary) = trip.itinerary() {
//!     println!("{itinerary}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod params;
pub mod preferences;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, UpdateResult};
pub use error::{Result, WayfarerError};
pub use itinerary::{
    FixtureSource, ItineraryManager, ItinerarySource, ItineraryState, JsonFileSource,
};
pub use models::{
    Activity, Currency, Day, DisplayPreferences, Filters, Itinerary, NotificationSettings,
    Preferences,
};
pub use params::{
    ActivityFields, ActivityPatch, FiltersPatch, NotificationsPatch, PreferencesPatch,
};
pub use preferences::{
    DurableSlot, MemorySlot, PreferenceStore, PreferenceStoreBuilder, SqliteSlot,
};
