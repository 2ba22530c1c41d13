//! Command definitions and dispatch for the `wf` binary.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, so `wayfarer-core` stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Store / Manager
//! ```

use std::{collections::BTreeSet, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use wayfarer_core::{
    itinerary::sample_itinerary, ActivityFields, ActivityPatch, CreateResult, Currency,
    DeleteResult, DisplayPreferences, FiltersPatch, FixtureSource, ItineraryManager,
    ItinerarySource, ItineraryState, JsonFileSource, NotificationsPatch, OperationStatus,
    PreferenceStore, Preferences, PreferencesPatch, SqliteSlot, UpdateResult,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Preference commands
// ============================================================================

/// Supported display currencies
#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum CurrencyArg {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
}

impl From<CurrencyArg> for Currency {
    fn from(val: CurrencyArg) -> Self {
        match val {
            CurrencyArg::Usd => Currency::Usd,
            CurrencyArg::Eur => Currency::Eur,
            CurrencyArg::Gbp => Currency::Gbp,
            CurrencyArg::Jpy => Currency::Jpy,
            CurrencyArg::Aud => Currency::Aud,
        }
    }
}

/// Show the stored preferences
#[derive(Args)]
pub struct ShowPrefsArgs {
    /// Print the raw JSON document instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Change top-level preferences
///
/// Display flags are combined with the current display settings and saved
/// as one replacement group.
#[derive(Args)]
pub struct SetPrefsArgs {
    /// Currency prices are shown in
    #[arg(long, value_enum, ignore_case = true)]
    pub currency: Option<CurrencyArg>,
    /// Short locale code (e.g. en, fr)
    #[arg(long)]
    pub language: Option<String>,
    /// Enable or disable dark mode
    #[arg(long)]
    pub dark_mode: Option<bool>,
    /// Enable or disable high contrast
    #[arg(long)]
    pub high_contrast: Option<bool>,
}

impl SetPrefsArgs {
    /// Builds the shallow patch, filling display flags from `current`.
    pub fn into_patch(self, current: &Preferences) -> PreferencesPatch {
        let display_preferences = if self.dark_mode.is_some() || self.high_contrast.is_some() {
            Some(DisplayPreferences {
                dark_mode: self
                    .dark_mode
                    .unwrap_or(current.display_preferences.dark_mode),
                high_contrast: self
                    .high_contrast
                    .unwrap_or(current.display_preferences.high_contrast),
            })
        } else {
            None
        };

        PreferencesPatch {
            currency: self.currency.map(Currency::from),
            language: self.language,
            display_preferences,
            ..Default::default()
        }
    }
}

/// Change individual destination filters
#[derive(Args)]
pub struct FiltersArgs {
    /// Preferred climate (repeat for several)
    #[arg(long, conflicts_with = "clear_climate")]
    pub climate: Vec<String>,
    /// Remove all climate preferences
    #[arg(long)]
    pub clear_climate: bool,
    /// Activity type of interest (repeat for several)
    #[arg(long = "activity-type", conflicts_with = "clear_activity_types")]
    pub activity_types: Vec<String>,
    /// Remove all activity type preferences
    #[arg(long)]
    pub clear_activity_types: bool,
    /// Maximum travel distance
    #[arg(long, conflicts_with = "clear_max_distance")]
    pub max_distance: Option<f64>,
    /// Remove the distance limit
    #[arg(long)]
    pub clear_max_distance: bool,
    /// Minimum safety rating
    #[arg(long)]
    pub safety_rating: Option<f64>,
    /// Only destinations that do (true) or do not (false) require a visa
    #[arg(long, conflicts_with = "clear_visa_required")]
    pub visa_required: Option<bool>,
    /// Accept destinations regardless of visa requirement
    #[arg(long)]
    pub clear_visa_required: bool,
}

fn set_patch(values: Vec<String>, clear: bool) -> Option<BTreeSet<String>> {
    if clear {
        Some(BTreeSet::new())
    } else if values.is_empty() {
        None
    } else {
        Some(values.into_iter().collect())
    }
}

fn nullable_patch<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

impl From<FiltersArgs> for FiltersPatch {
    fn from(val: FiltersArgs) -> Self {
        FiltersPatch {
            climate: set_patch(val.climate, val.clear_climate),
            activity_types: set_patch(val.activity_types, val.clear_activity_types),
            max_distance: nullable_patch(val.max_distance, val.clear_max_distance),
            safety_rating: val.safety_rating,
            visa_required: nullable_patch(val.visa_required, val.clear_visa_required),
        }
    }
}

/// Toggle individual notifications
#[derive(Args)]
pub struct NotifyArgs {
    /// Alerts when prices drop
    #[arg(long)]
    pub price_alerts: Option<bool>,
    /// Reminders before a trip starts
    #[arg(long)]
    pub trip_reminders: Option<bool>,
    /// Promotional deals
    #[arg(long)]
    pub deals: Option<bool>,
}

impl From<NotifyArgs> for NotificationsPatch {
    fn from(val: NotifyArgs) -> Self {
        NotificationsPatch {
            price_alerts: val.price_alerts,
            trip_reminders: val.trip_reminders,
            deals: val.deals,
        }
    }
}

/// Preference subcommands
#[derive(Subcommand)]
pub enum PrefsCommands {
    /// Show the current preferences
    Show(ShowPrefsArgs),
    /// Change currency, language or display settings
    Set(SetPrefsArgs),
    /// Change destination filters
    Filters(FiltersArgs),
    /// Change notification settings
    Notify(NotifyArgs),
    /// Restore the default preferences
    Reset,
}

// ============================================================================
// Itinerary commands
// ============================================================================

/// Add an activity to a day
#[derive(Args)]
pub struct AddActivityArgs {
    /// Date of the day to add to (e.g. 2024-01-15)
    pub date: String,
    /// Title of the activity
    pub title: String,
    #[arg(long, default_value = "")]
    pub time: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value_t = 0.0)]
    pub cost: f64,
    /// Category label (e.g. Cultural, Leisure)
    #[arg(long = "type", default_value = "")]
    pub activity_type: String,
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<AddActivityArgs> for ActivityFields {
    fn from(val: AddActivityArgs) -> Self {
        ActivityFields {
            time: val.time,
            title: val.title,
            location: val.location,
            cost: val.cost,
            activity_type: val.activity_type,
            notes: val.notes,
        }
    }
}

/// Edit fields of an activity
#[derive(Args)]
pub struct EditActivityArgs {
    /// Date of the day holding the activity
    pub date: String,
    /// Activity ID
    pub id: String,
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub cost: Option<f64>,
    #[arg(long = "type")]
    pub activity_type: Option<String>,
    #[arg(long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,
    /// Remove the activity's notes
    #[arg(long)]
    pub clear_notes: bool,
}

impl EditActivityArgs {
    fn patch(&self) -> ActivityPatch {
        ActivityPatch {
            time: self.time.clone(),
            title: self.title.clone(),
            location: self.location.clone(),
            cost: self.cost,
            activity_type: self.activity_type.clone(),
            notes: nullable_patch(self.notes.clone(), self.clear_notes),
        }
    }
}

/// Remove an activity from a day
#[derive(Args)]
pub struct DeleteActivityArgs {
    /// Date of the day holding the activity
    pub date: String,
    /// Activity ID
    pub id: String,
}

/// Itinerary subcommands
///
/// Each invocation loads the itinerary, applies one operation to that
/// session's copy and prints the result. Nothing is written back.
#[derive(Subcommand)]
pub enum ItineraryCommands {
    /// Show the whole itinerary
    Show,
    /// Add an activity to a day
    Add(AddActivityArgs),
    /// Edit an activity
    Edit(EditActivityArgs),
    /// Delete an activity
    Delete(DeleteActivityArgs),
}

// ============================================================================
// Dispatch
// ============================================================================

/// Runs commands and renders their results.
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    pub async fn handle_prefs_command(
        &self,
        store: &PreferenceStore<SqliteSlot>,
        command: PrefsCommands,
    ) -> Result<()> {
        match command {
            PrefsCommands::Show(args) => self.show_preferences(store, args.json).await,
            PrefsCommands::Set(args) => {
                let before = store.preferences().await;
                let patch = args.into_patch(&before);
                if patch.is_empty() {
                    let status = OperationStatus::failure(
                        "Nothing to change: pass --currency, --language, --dark-mode or --high-contrast"
                            .to_string(),
                    );
                    return self.renderer.render(&status.to_string());
                }
                let after = store
                    .update_preferences(patch)
                    .await
                    .context("Failed to save preferences")?;
                self.render_update(&before, after)
            }
            PrefsCommands::Filters(args) => {
                let before = store.preferences().await;
                let after = store
                    .update_filters(args.into())
                    .await
                    .context("Failed to update filters")?;
                self.render_update(&before, after)
            }
            PrefsCommands::Notify(args) => {
                let before = store.preferences().await;
                let after = store
                    .update_notification_settings(args.into())
                    .await
                    .context("Failed to update notification settings")?;
                self.render_update(&before, after)
            }
            PrefsCommands::Reset => {
                store
                    .reset_preferences()
                    .await
                    .context("Failed to reset preferences")?;
                let status = OperationStatus::success("Preferences reset to defaults".to_string());
                self.renderer.render(&status.to_string())
            }
        }
    }

    pub async fn show_preferences(
        &self,
        store: &PreferenceStore<SqliteSlot>,
        json: bool,
    ) -> Result<()> {
        let preferences = store.preferences().await;
        if json {
            println!("{}", serde_json::to_string_pretty(&preferences)?);
            Ok(())
        } else {
            self.renderer.render(&preferences.to_string())
        }
    }

    pub async fn handle_itinerary_command(
        &self,
        file: Option<PathBuf>,
        command: ItineraryCommands,
    ) -> Result<()> {
        match file {
            Some(path) => {
                debug!("Loading itinerary from {}", path.display());
                self.run_itinerary(JsonFileSource::new(path), command).await
            }
            None => {
                self.run_itinerary(FixtureSource::new(sample_itinerary()), command)
                    .await
            }
        }
    }

    async fn run_itinerary<S: ItinerarySource>(
        &self,
        source: S,
        command: ItineraryCommands,
    ) -> Result<()> {
        let mut manager = ItineraryManager::new(source);
        manager
            .load_itinerary()
            .await
            .context("Failed to load itinerary")?;

        if manager.state() == &ItineraryState::Empty {
            return self.renderer.render("No itinerary found.\n");
        }

        let output = match command {
            ItineraryCommands::Show => manager
                .itinerary()
                .map(ToString::to_string)
                .unwrap_or_default(),
            ItineraryCommands::Add(args) => {
                let date = args.date.clone();
                match manager.add_activity(&date, args.into()) {
                    Some(activity) => CreateResult::new(activity).to_string(),
                    None => missing_day(&date),
                }
            }
            ItineraryCommands::Edit(args) => {
                let patch = args.patch();
                match manager.edit_activity(&args.date, &args.id, &patch) {
                    Some(activity) => {
                        UpdateResult::with_changes(activity, patch.describe()).to_string()
                    }
                    None => missing_activity(&args.date, &args.id),
                }
            }
            ItineraryCommands::Delete(args) => {
                match manager.delete_activity(&args.date, &args.id) {
                    Some(activity) => {
                        let mut output = DeleteResult::new(activity).to_string();
                        if let Some(day) = manager.day(&args.date) {
                            output.push('\n');
                            output.push_str(&day.to_string());
                        }
                        output
                    }
                    None => missing_activity(&args.date, &args.id),
                }
            }
        };

        self.renderer.render(&output)
    }

    fn render_update(&self, before: &Preferences, after: Preferences) -> Result<()> {
        let changes = after.changes_from(before);
        self.renderer
            .render(&UpdateResult::with_changes(after, changes).to_string())
    }
}

fn missing_day(date: &str) -> String {
    OperationStatus::failure(format!("No day {date} in this itinerary")).to_string()
}

fn missing_activity(date: &str, id: &str) -> String {
    OperationStatus::failure(format!("No activity with ID {id} on {date}")).to_string()
}
