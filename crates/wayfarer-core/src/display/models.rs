//! Display implementations for domain models.
//!
//! All output is markdown: a level-one header per document, bullet metadata,
//! and nested headers for days and activities.

use std::{collections::BTreeSet, fmt};

use crate::models::{Activity, Currency, Day, Itinerary, Preferences};

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn list_or_any(values: &BTreeSet<String>) -> String {
    if values.is_empty() {
        "any".to_string()
    } else {
        values.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Preferences")?;
        writeln!(f)?;
        writeln!(f, "- Currency: {}", self.currency)?;
        writeln!(f, "- Language: {}", self.language.to_uppercase())?;

        let filters = &self.filters;
        writeln!(f, "\n## Filters")?;
        writeln!(f)?;
        writeln!(f, "- Climate: {}", list_or_any(&filters.climate))?;
        writeln!(f, "- Activity types: {}", list_or_any(&filters.activity_types))?;
        match filters.max_distance {
            Some(distance) => writeln!(f, "- Max distance: {distance}")?,
            None => writeln!(f, "- Max distance: unlimited")?,
        }
        writeln!(f, "- Safety rating: {}", filters.safety_rating)?;
        let visa = match filters.visa_required {
            Some(true) => "required",
            Some(false) => "not required",
            None => "either",
        };
        writeln!(f, "- Visa: {visa}")?;

        let notifications = &self.notifications;
        writeln!(f, "\n## Notifications")?;
        writeln!(f)?;
        writeln!(f, "- Price alerts: {}", on_off(notifications.price_alerts))?;
        writeln!(f, "- Trip reminders: {}", on_off(notifications.trip_reminders))?;
        writeln!(f, "- Deals: {}", on_off(notifications.deals))?;

        let display = &self.display_preferences;
        writeln!(f, "\n## Display")?;
        writeln!(f)?;
        writeln!(f, "- Dark mode: {}", on_off(display.dark_mode))?;
        writeln!(f, "- High contrast: {}", on_off(display.high_contrast))
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} {} (ID: {})", self.time, self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Location: {}", self.location)?;
        writeln!(f, "- Cost: {}", self.cost)?;
        writeln!(f, "- Type: {}", self.activity_type)?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.date)?;
        writeln!(f)?;

        if self.activities.is_empty() {
            writeln!(f, "No activities planned.")?;
            return writeln!(f);
        }

        for activity in &self.activities {
            write!(f, "{activity}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.destination_name)?;
        writeln!(f)?;

        write!(f, "- Dates: {} - {}", self.start_date, self.end_date)?;
        match self.trip_length() {
            Some(1) => writeln!(f, " (1 day)")?,
            Some(days) => writeln!(f, " ({days} days)")?,
            None => writeln!(f)?,
        }
        writeln!(f, "- Total cost: {}", self.total_cost())?;
        writeln!(f)?;

        if self.days.is_empty() {
            return writeln!(f, "No days in this itinerary.");
        }

        for day in &self.days {
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::sample_itinerary;

    #[test]
    fn test_preferences_display_defaults() {
        let output = Preferences::default().to_string();
        assert!(output.starts_with("# Preferences\n"));
        assert!(output.contains("- Currency: USD"));
        assert!(output.contains("- Language: EN"));
        assert!(output.contains("- Climate: any"));
        assert!(output.contains("- Max distance: unlimited"));
        assert!(output.contains("- Visa: either"));
        assert!(output.contains("- Deals: on"));
        assert!(output.contains("- Dark mode: off"));
    }

    #[test]
    fn test_itinerary_display_lists_days_and_activities() {
        let output = sample_itinerary().to_string();
        assert!(output.starts_with("# Bali, Indonesia\n"));
        assert!(output.contains("- Dates: 2024-01-15 - 2024-01-20 (6 days)"));
        assert!(output.contains("- Total cost: 70"));
        assert!(output.contains("## 2024-01-16"));
        assert!(output.contains("### 09:00 Temple Visit (ID: 1)"));
        assert!(output.contains("Bring camera and modest clothing"));
    }

    #[test]
    fn test_empty_day_display() {
        let output = Day::new("2024-01-18").to_string();
        assert!(output.contains("## 2024-01-18"));
        assert!(output.contains("No activities planned."));
    }
}
