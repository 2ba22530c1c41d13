use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ItineraryCommands, PrefsCommands};

/// Command-line front-end for the wayfarer trip planner
///
/// Keeps traveller preferences (currency, language, destination filters,
/// notifications and display settings) in a local SQLite file, and lets you
/// inspect and edit a trip itinerary for the length of one invocation.
#[derive(Parser)]
#[command(version, about, name = "wf")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/wayfarer/wayfarer.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the wayfarer CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show and change saved preferences
    #[command(alias = "p")]
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },
    /// Inspect or edit an itinerary (changes last for this run only)
    #[command(alias = "i")]
    Itinerary {
        /// Load the itinerary from a JSON file instead of the built-in sample
        #[arg(long)]
        file: Option<PathBuf>,

        #[command(subcommand)]
        command: ItineraryCommands,
    },
}
