//! wayfarer CLI application
//!
//! Command-line interface for saved travel preferences and session
//! itineraries.

mod args;
mod cli;
mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use wayfarer_core::{PreferenceStore, PreferenceStoreBuilder, SqliteSlot};
use Commands::*;

async fn open_store(database_file: Option<PathBuf>) -> Result<PreferenceStore<SqliteSlot>> {
    PreferenceStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open preference store")
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("wayfarer started");

    match command {
        Some(Prefs { command }) => {
            let store = open_store(database_file).await?;
            cli.handle_prefs_command(&store, command).await
        }
        Some(Itinerary { file, command }) => cli.handle_itinerary_command(file, command).await,
        None => {
            let store = open_store(database_file).await?;
            cli.show_preferences(&store, false).await
        }
    }
}
