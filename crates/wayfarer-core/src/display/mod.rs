//! Display formatting for documents and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! producing markdown. Result wrappers in [`results`] and [`status`] add the
//! confirmation line shown before the resource.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Result Types   │    │   Formatted     │
//! │ (Prefs, Trips)  │───▶│ & Status        │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use wayfarer_core::{display::UpdateResult, models::Preferences};
//!
//! let before = Preferences::default();
//! let mut after = before.clone();
//! after.language = "fr".to_string();
//!
//! let changes = after.changes_from(&before);
//! let output = UpdateResult::with_changes(after, changes).to_string();
//! assert!(output.contains("Changes made:"));
//! assert!(output.contains("Language: en -> fr"));
//! ```

pub mod models;
pub mod results;
pub mod status;

pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
