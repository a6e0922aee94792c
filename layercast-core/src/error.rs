//! Error types for layercast.

use thiserror::Error;

/// The main error type for layercast operations.
#[derive(Debug, Error)]
pub enum LayercastError {
    /// The layer schema or profile document could not be parsed.
    #[error("Schema error: {0}")]
    Schema(#[from] serde_json::Error),

    /// Invalid layer profile.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A string field arrived without a length, so its VARCHAR width
    /// cannot be determined.
    #[error("Field '{field}' is a string type but has no length")]
    MissingLength { field: String },

    /// A line in a bracketed column block held no `[NAME]` token.
    #[error("Malformed column block at line {line}: {content:?}")]
    ColumnBlock { line: usize, content: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type LayercastResult<T> = Result<T, LayercastError>;

impl LayercastError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
