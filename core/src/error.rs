//! Error types for corpus mapping.

use thiserror::Error;

/// Errors raised while mapping a corpus document into verse records.
///
/// Paths are slash-separated keys from the document root, e.g.
/// `Genesis/1/3`.
#[derive(Debug, Error)]
pub enum MapError {
    /// The document is not valid JSON, or does not deserialize into the
    /// expected structure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A value in the document has the wrong JSON type.
    #[error("unexpected shape at '{path}': expected {expected}")]
    UnexpectedShape { path: String, expected: &'static str },

    /// A chapter or verse key is not a positive integer.
    #[error("invalid number at '{path}': '{value}' is not a positive integer")]
    InvalidNumber { path: String, value: String },
}

/// Convenience alias for results with [`MapError`].
pub type Result<T> = std::result::Result<T, MapError>;
