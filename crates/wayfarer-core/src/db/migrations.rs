//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Databases created before revision tracking lack the column
        let has_revision_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('slots') WHERE name = 'revision'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_revision_column {
            self.connection
                .execute(
                    "ALTER TABLE slots ADD COLUMN revision INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .db_context("Failed to add revision column to slots table")?;
        }

        Ok(())
    }
}
