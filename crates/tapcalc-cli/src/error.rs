//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read
    #[error("Cannot read config '{path}': {source}")]
    ConfigRead {
        /// Path that was requested
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file was read but is invalid
    #[error(transparent)]
    Config(#[from] tapcalc::ConfigError),

    /// Unrecognized key label
    #[error(transparent)]
    Key(#[from] tapcalc::KeyParseError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a config read error
    #[must_use]
    pub fn config_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}
