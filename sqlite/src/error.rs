//! Error types for SQLite verse store operations.
//!
//! Provides a unified error type covering database access, schema
//! lifecycle, and corpus loading failures.

use thiserror::Error;

/// Errors that can occur during store and ingestion operations.
#[derive(Debug, Error)]
pub enum SqliteError {
    /// SQLite database operation failure.
    #[error("database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    /// Schema creation or teardown failure.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// A corpus file could not be read or mapped.
    #[error("loader error: {0}")]
    LoaderError(#[from] scripture_db::LoadError),
}

/// Convenience alias for results with [`SqliteError`].
pub type Result<T> = std::result::Result<T, SqliteError>;
