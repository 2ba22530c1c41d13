//! Error types for the wayfarer library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all preference and itinerary operations.
#[derive(Error, Debug)]
pub enum WayfarerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The durable slot could not be read or its content could not be parsed.
    /// The preference store recovers from this locally.
    #[error("Failed to read durable slot '{key}': {source}")]
    PersistenceRead {
        key: String,
        #[source]
        source: Box<WayfarerError>,
    },
    /// The durable slot could not be written. In-memory state is untouched.
    #[error("Failed to write durable slot '{key}': {source}")]
    PersistenceWrite {
        key: String,
        #[source]
        source: Box<WayfarerError>,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Itinerary source failures
    #[error("Failed to fetch itinerary: {message}")]
    Fetch { message: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> WayfarerError {
        WayfarerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WayfarerError {
        WayfarerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WayfarerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a failed slot read for `key`.
    pub fn persistence_read(key: impl Into<String>, source: WayfarerError) -> Self {
        Self::PersistenceRead {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Wraps a failed slot write for `key`.
    pub fn persistence_write(key: impl Into<String>, source: WayfarerError) -> Self {
        Self::PersistenceWrite {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Maps a `spawn_blocking` join failure.
    pub(crate) fn join(err: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {err}"),
        }
    }

    /// Returns true for failures of a durable write.
    pub fn is_persistence_write(&self) -> bool {
        matches!(self, Self::PersistenceWrite { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WayfarerError::database(message).with_source(e))
    }
}

/// Result type alias for wayfarer operations
pub type Result<T> = std::result::Result<T, WayfarerError>;
