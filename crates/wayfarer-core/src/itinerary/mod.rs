//! Session-scoped itinerary document manager.
//!
//! The [`ItineraryManager`] loads a whole [`Itinerary`] from an
//! [`ItinerarySource`] and then edits it in memory. Nothing is persisted; the
//! document lives as long as the manager.
//!
//! ```text
//! Loading ──fetch──▶ Loaded ──add/edit/delete──▶ Loaded
//!    └──nothing / error──▶ Empty
//! ```
//!
//! CRUD operations address a day by date and an activity by id within that
//! day. A miss is a silent no-op and returns `None`.
//!
//! # Usage
//!
//! ```rust
//! use wayfarer_core::{
//!     itinerary::{FixtureSource, ItineraryManager},
//!     models::Itinerary,
//!     params::ActivityFields,
//! };
//!
//! # async fn example() -> wayfarer_core::Result<()> {
//! let trip = Itinerary {
//!     destination_name: "Lisbon".to_string(),
//!     start_date: "2024-05-01".to_string(),
//!     end_date: "2024-05-03".to_string(),
//!     days: vec![wayfarer_core::models::Day::new("2024-05-01")],
//! };
//! let mut manager = ItineraryManager::new(FixtureSource::new(trip));
//! manager.load_itinerary().await?;
//!
//! let added = manager.add_activity(
//!     "2024-05-01",
//!     ActivityFields {
//!         title: "Tram 28".to_string(),
//!         ..Default::default()
//!     },
//! );
//! assert!(added.is_some());
//! # Ok(())
//! # }
//! ```

use log::{debug, error};

use crate::{
    error::Result,
    models::{Activity, Day, Itinerary},
    params::{ActivityFields, ActivityPatch},
};

pub mod ids;
pub mod source;


pub use ids::ActivityIdGenerator;
pub use source::{sample_itinerary, FixtureSource, ItinerarySource, JsonFileSource};

/// Lifecycle of the managed document.
#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryState {
    /// The fetch has not resolved yet
    Loading,

    /// A document is loaded and editable
    Loaded(Itinerary),

    /// The source had nothing (or failed)
    Empty,
}

/// Owns one itinerary document for the duration of a session.
pub struct ItineraryManager<S: ItinerarySource> {
    source: S,
    state: ItineraryState,
    ids: ActivityIdGenerator,
}

impl<S: ItinerarySource> ItineraryManager<S> {
    /// Creates a manager in the loading state.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ItineraryState::Loading,
            ids: ActivityIdGenerator::default(),
        }
    }

    /// Fetches the document from the source and replaces the current state.
    ///
    /// An empty answer moves the manager to [`ItineraryState::Empty`]. A
    /// failed fetch is logged, also ends in `Empty`, and the error is returned.
    pub async fn load_itinerary(&mut self) -> Result<()> {
        self.state = ItineraryState::Loading;

        match self.source.fetch().await {
            Ok(Some(itinerary)) => {
                debug!(
                    "Loaded itinerary '{}' with {} day(s)",
                    itinerary.destination_name,
                    itinerary.days.len()
                );
                self.ids = ActivityIdGenerator::seeded_from(&itinerary);
                self.state = ItineraryState::Loaded(itinerary);
                Ok(())
            }
            Ok(None) => {
                debug!("Itinerary source returned nothing");
                self.state = ItineraryState::Empty;
                Ok(())
            }
            Err(e) => {
                error!("Error loading itinerary: {e}");
                self.state = ItineraryState::Empty;
                Err(e)
            }
        }
    }

    pub fn state(&self) -> &ItineraryState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ItineraryState::Loading)
    }

    /// The loaded document, if any.
    pub fn itinerary(&self) -> Option<&Itinerary> {
        match &self.state {
            ItineraryState::Loaded(itinerary) => Some(itinerary),
            _ => None,
        }
    }

    /// Looks up a loaded day by date.
    pub fn day(&self, date: &str) -> Option<&Day> {
        self.itinerary().and_then(|itinerary| itinerary.day(date))
    }

    /// Appends a new activity to the day at `date`.
    ///
    /// Returns the created activity, or `None` when no such day exists. Days
    /// are never created implicitly.
    pub fn add_activity(&mut self, date: &str, fields: ActivityFields) -> Option<Activity> {
        let ItineraryState::Loaded(itinerary) = &mut self.state else {
            return None;
        };
        itinerary.day(date)?;

        let id = self.ids.allocate(itinerary);
        let activity = fields.into_activity(id);
        let day = itinerary.day_mut(date)?;
        day.activities.push(activity.clone());

        debug!("Added activity {} to {date}", activity.id);
        Some(activity)
    }

    /// Applies `patch` to the activity `activity_id` in the day at `date`.
    ///
    /// Returns the updated activity, or `None` on a miss.
    pub fn edit_activity(
        &mut self,
        date: &str,
        activity_id: &str,
        patch: &ActivityPatch,
    ) -> Option<Activity> {
        let activity = self
            .loaded_day_mut(date)?
            .activities
            .iter_mut()
            .find(|a| a.id == activity_id)?;

        patch.apply_to(activity);
        debug!("Edited activity {activity_id} on {date}");
        Some(activity.clone())
    }

    /// Removes the first activity with `activity_id` in the day at `date`.
    ///
    /// Returns the removed activity, or `None` on a miss. Activities in other
    /// days are never touched.
    pub fn delete_activity(&mut self, date: &str, activity_id: &str) -> Option<Activity> {
        let day = self.loaded_day_mut(date)?;
        let position = day.activities.iter().position(|a| a.id == activity_id)?;

        let removed = day.activities.remove(position);
        debug!("Deleted activity {activity_id} from {date}");
        Some(removed)
    }

    fn loaded_day_mut(&mut self, date: &str) -> Option<&mut Day> {
        match &mut self.state {
            ItineraryState::Loaded(itinerary) => itinerary.day_mut(date),
            _ => None,
        }
    }
}
