//! Error types for the engine and its evaluator

use thiserror::Error;

/// Result type for evaluator operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Broad category of an evaluation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The expression text is not well formed
    Parse,
    /// The expression is well formed but has no real-number value
    Evaluation,
}

/// Errors raised by an [`Evaluate`](crate::evaluator::Evaluate) implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Nothing to evaluate
    #[error("Empty expression")]
    EmptyExpression,

    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    Parse(String),

    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,

    /// Result is NaN or infinite
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}

impl EvalError {
    /// Create a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns the category this error belongs to
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyExpression | Self::Parse(_) => ErrorKind::Parse,
            Self::DivisionByZero | Self::InvalidResult(_) => ErrorKind::Evaluation,
        }
    }
}

/// Unrecognized key label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown key: '{label}'")]
pub struct KeyParseError {
    /// The label that failed to parse
    pub label: String,
}

impl KeyParseError {
    /// Create a key parse error for the given label
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading an [`EngineConfig`](crate::config::EngineConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed YAML document
    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Well-formed document with an unusable value
    #[error("Invalid configuration value for '{field}': {message}")]
    Value {
        /// Offending field
        field: &'static str,
        /// Error message
        message: String,
    },
}

impl ConfigError {
    /// Create a value error
    #[must_use]
    pub fn value(field: &'static str, message: impl Into<String>) -> Self {
        Self::Value {
            field,
            message: message.into(),
        }
    }
}
