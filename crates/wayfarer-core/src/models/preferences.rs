//! Preferences document and its nested settings groups.

use std::{collections::BTreeSet, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::WayfarerError;

/// Currencies a traveller can display prices in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "JPY")]
    Jpy,
    #[serde(rename = "AUD")]
    Aud,
}

impl Currency {
    /// Every supported currency, in the order offered to users.
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Aud,
    ];

    /// ISO 4217 code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Aud => "AUD",
        }
    }
}

impl FromStr for Currency {
    type Err = WayfarerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let supported: Vec<&str> = Currency::ALL.iter().map(Currency::as_str).collect();
                WayfarerError::invalid_input("currency").with_reason(format!(
                    "unsupported currency code '{s}', expected one of {}",
                    supported.join(", ")
                ))
            })
    }
}

/// Destination search filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    /// Preferred climates (e.g. "tropical", "temperate")
    pub climate: BTreeSet<String>,

    /// Activity categories the traveller is interested in
    pub activity_types: BTreeSet<String>,

    /// Maximum travel distance, unbounded when absent
    pub max_distance: Option<f64>,

    /// Minimum acceptable safety rating
    pub safety_rating: f64,

    /// Visa requirement filter: `None` means either is fine
    pub visa_required: Option<bool>,
}

/// Notification toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub price_alerts: bool,
    pub trip_reminders: bool,
    pub deals: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            price_alerts: true,
            trip_reminders: true,
            deals: true,
        }
    }
}

/// Display toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPreferences {
    pub dark_mode: bool,
    pub high_contrast: bool,
}

/// The full settings record.
///
/// Every field is required when deserializing, so a stored document that is
/// missing any of the five groups fails to parse instead of producing a
/// partial document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub currency: Currency,
    pub language: String,
    pub filters: Filters,
    pub notifications: NotificationSettings,
    pub display_preferences: DisplayPreferences,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            currency: Currency::Usd,
            language: "en".to_string(),
            filters: Filters::default(),
            notifications: NotificationSettings::default(),
            display_preferences: DisplayPreferences::default(),
        }
    }
}

impl Preferences {
    /// Names the top-level fields that differ from `before`.
    pub fn changes_from(&self, before: &Preferences) -> Vec<String> {
        let mut changes = Vec::new();
        if self.currency != before.currency {
            changes.push(format!(
                "Currency: {} -> {}",
                before.currency.as_str(),
                self.currency.as_str()
            ));
        }
        if self.language != before.language {
            changes.push(format!("Language: {} -> {}", before.language, self.language));
        }
        if self.filters != before.filters {
            changes.push("Updated filters".to_string());
        }
        if self.notifications != before.notifications {
            changes.push("Updated notifications".to_string());
        }
        if self.display_preferences != before.display_preferences {
            changes.push("Updated display preferences".to_string());
        }
        changes
    }
}
