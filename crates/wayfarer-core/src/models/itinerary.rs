//! Itinerary, day and activity models.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A single scheduled item within a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Identifier, unique across the whole itinerary
    pub id: String,

    /// Start time as entered (e.g. "09:00")
    pub time: String,

    pub title: String,

    pub location: String,

    /// Cost in the traveller's display currency
    pub cost: f64,

    /// Category label (e.g. "Cultural", "Leisure")
    #[serde(rename = "type")]
    pub activity_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A date-keyed container of activities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Day {
    /// Date string, unique within the itinerary
    pub date: String,

    /// Activities in insertion order
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Day {
    /// Creates an empty day.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            activities: Vec::new(),
        }
    }

    /// Sum of activity costs for the day.
    pub fn total_cost(&self) -> f64 {
        self.activities.iter().map(|a| a.cost).sum()
    }

    /// Finds an activity in this day by id.
    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }
}

/// A named trip with a date range and an ordered list of days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    #[serde(alias = "destination")]
    pub destination_name: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub days: Vec<Day>,
}

impl Itinerary {
    /// Looks up a day by its date.
    pub fn day(&self, date: &str) -> Option<&Day> {
        self.days.iter().find(|d| d.date == date)
    }

    pub(crate) fn day_mut(&mut self, date: &str) -> Option<&mut Day> {
        self.days.iter_mut().find(|d| d.date == date)
    }

    /// Iterates every activity across all days in order.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.days.iter().flat_map(|d| d.activities.iter())
    }

    /// Sum of activity costs across all days.
    pub fn total_cost(&self) -> f64 {
        self.days.iter().map(Day::total_cost).sum()
    }

    /// Inclusive number of days between start and end dates.
    ///
    /// Returns `None` when either date is not an ISO `YYYY-MM-DD` string or
    /// the end precedes the start.
    pub fn trip_length(&self) -> Option<i64> {
        let start: Date = self.start_date.parse().ok()?;
        let end: Date = self.end_date.parse().ok()?;
        let span = start.until(end).ok()?;
        let days = i64::from(span.get_days());
        if days < 0 {
            None
        } else {
            Some(days + 1)
        }
    }
}
