//! Data models for preferences and itineraries.
//!
//! This module contains the domain documents owned by the
//! [`crate::preferences::PreferenceStore`] and the
//! [`crate::itinerary::ItineraryManager`]. Display implementations live in
//! [`crate::display::models`] so the data structures stay free of
//! presentation logic.
//!
//! Both documents serialize to camelCase JSON, matching the layout the mobile
//! front-end persists and fetches.
//!
//! # Examples
//!
//! ```rust
//! use wayfarer_core::models::{Currency, Preferences};
//!
//! let prefs = Preferences::default();
//! assert_eq!(prefs.currency, Currency::Usd);
//! assert!(prefs.notifications.deals);
//!
//! let json = serde_json::to_string(&prefs).unwrap();
//! assert!(json.contains("\"displayPreferences\""));
//! ```

pub mod itinerary;
pub mod preferences;


pub use itinerary::{Activity, Day, Itinerary};
pub use preferences::{Currency, DisplayPreferences, Filters, NotificationSettings, Preferences};
