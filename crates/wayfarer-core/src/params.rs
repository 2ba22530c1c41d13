//! Parameter structures for wayfarer operations.
//!
//! These are interface-agnostic inputs to the preference store and the
//! itinerary manager. Interface layers (the CLI today) build them from their
//! own argument types via `From` conversions, keeping clap out of the core.
//!
//! ## Merge granularity
//!
//! The three preference patches merge at different depths:
//!
//! ```text
//! PreferencesPatch     → replaces whole top-level values (filters, notifications, ...)
//! FiltersPatch         → replaces individual keys inside `filters`
//! NotificationsPatch   → replaces individual flags inside `notifications`
//! ```
//!
//! A `None` field in any patch means "keep the current value".

use std::collections::BTreeSet;

use crate::models::{
    Activity, Currency, DisplayPreferences, Filters, NotificationSettings, Preferences,
};

/// Shallow patch over the preferences document.
///
/// Nested groups are replaced wholesale, never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferencesPatch {
    pub currency: Option<Currency>,
    pub language: Option<String>,
    pub filters: Option<Filters>,
    pub notifications: Option<NotificationSettings>,
    pub display_preferences: Option<DisplayPreferences>,
}

impl PreferencesPatch {
    /// Returns `current` with every present top-level key replaced.
    pub fn apply_to(&self, current: &Preferences) -> Preferences {
        Preferences {
            currency: self.currency.unwrap_or(current.currency),
            language: self
                .language
                .clone()
                .unwrap_or_else(|| current.language.clone()),
            filters: self
                .filters
                .clone()
                .unwrap_or_else(|| current.filters.clone()),
            notifications: self.notifications.unwrap_or(current.notifications),
            display_preferences: self
                .display_preferences
                .unwrap_or(current.display_preferences),
        }
    }

    /// True when no key is present.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Key-level patch over the `filters` group.
///
/// Nullable filter keys take `Some(None)` to clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FiltersPatch {
    pub climate: Option<BTreeSet<String>>,
    pub activity_types: Option<BTreeSet<String>>,
    pub max_distance: Option<Option<f64>>,
    pub safety_rating: Option<f64>,
    pub visa_required: Option<Option<bool>>,
}

impl FiltersPatch {
    /// Returns `current` with every present filter key replaced.
    pub fn apply_to(&self, current: &Filters) -> Filters {
        Filters {
            climate: self
                .climate
                .clone()
                .unwrap_or_else(|| current.climate.clone()),
            activity_types: self
                .activity_types
                .clone()
                .unwrap_or_else(|| current.activity_types.clone()),
            max_distance: self.max_distance.unwrap_or(current.max_distance),
            safety_rating: self.safety_rating.unwrap_or(current.safety_rating),
            visa_required: self.visa_required.unwrap_or(current.visa_required),
        }
    }
}

/// Flag-level patch over the `notifications` group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationsPatch {
    pub price_alerts: Option<bool>,
    pub trip_reminders: Option<bool>,
    pub deals: Option<bool>,
}

impl NotificationsPatch {
    /// Returns `current` with every present flag replaced.
    pub fn apply_to(&self, current: &NotificationSettings) -> NotificationSettings {
        NotificationSettings {
            price_alerts: self.price_alerts.unwrap_or(current.price_alerts),
            trip_reminders: self.trip_reminders.unwrap_or(current.trip_reminders),
            deals: self.deals.unwrap_or(current.deals),
        }
    }
}

/// Fields for a new activity. The manager assigns the id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFields {
    pub time: String,
    pub title: String,
    pub location: String,
    pub cost: f64,
    pub activity_type: String,
    pub notes: Option<String>,
}

impl ActivityFields {
    pub(crate) fn into_activity(self, id: String) -> Activity {
        Activity {
            id,
            time: self.time,
            title: self.title,
            location: self.location,
            cost: self.cost,
            activity_type: self.activity_type,
            notes: self.notes,
        }
    }
}

/// Field-level patch over an existing activity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityPatch {
    pub time: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub cost: Option<f64>,
    pub activity_type: Option<String>,
    /// `Some(None)` clears the notes
    pub notes: Option<Option<String>>,
}

impl ActivityPatch {
    /// Overwrites the present fields of `activity`. The id never changes.
    pub fn apply_to(&self, activity: &mut Activity) {
        if let Some(time) = &self.time {
            activity.time = time.clone();
        }
        if let Some(title) = &self.title {
            activity.title = title.clone();
        }
        if let Some(location) = &self.location {
            activity.location = location.clone();
        }
        if let Some(cost) = self.cost {
            activity.cost = cost;
        }
        if let Some(activity_type) = &self.activity_type {
            activity.activity_type = activity_type.clone();
        }
        if let Some(notes) = &self.notes {
            activity.notes = notes.clone();
        }
    }

    /// Names the fields this patch sets.
    pub fn describe(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if self.time.is_some() {
            changes.push("Updated time".to_string());
        }
        if self.title.is_some() {
            changes.push("Updated title".to_string());
        }
        if self.location.is_some() {
            changes.push("Updated location".to_string());
        }
        if self.cost.is_some() {
            changes.push("Updated cost".to_string());
        }
        if self.activity_type.is_some() {
            changes.push("Updated type".to_string());
        }
        match self.notes {
            Some(Some(_)) => changes.push("Updated notes".to_string()),
            Some(None) => changes.push("Cleared notes".to_string()),
            None => {}
        }
        changes
    }
}
