//! Error types for configuration and corpus loading.
//!
//! Every failure here is fatal for an ingestion run: a corpus that cannot be
//! read or mapped aborts the run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading configuration or corpus files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O failure, with the path that was being accessed.
    #[error("I/O error on '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A corpus document could not be mapped into verse records.
    #[error("failed to map corpus '{corpus}': {source}")]
    MapError {
        corpus: String,
        source: scripture_core::MapError,
    },
}

/// Convenience alias for results with [`LoadError`].
pub type Result<T> = std::result::Result<T, LoadError>;
