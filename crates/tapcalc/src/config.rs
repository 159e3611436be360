//! Engine configuration

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Tunable engine behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Text placed in the display buffer after a failed evaluation
    pub error_marker: String,
    /// Maximum fractional digits kept when formatting a result
    pub max_fraction_digits: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            error_marker: Self::DEFAULT_ERROR_MARKER.to_string(),
            max_fraction_digits: Self::DEFAULT_FRACTION_DIGITS,
        }
    }
}

impl EngineConfig {
    /// Default error marker
    pub const DEFAULT_ERROR_MARKER: &'static str = "Erreur";

    /// Default fractional digit count
    pub const DEFAULT_FRACTION_DIGITS: usize = 6;

    /// Largest fractional digit count an `f64` can meaningfully show
    pub const MAX_FRACTION_DIGITS: usize = 15;

    /// Create a new config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error marker
    #[must_use]
    pub fn with_error_marker(mut self, marker: impl Into<String>) -> Self {
        self.error_marker = marker.into();
        self
    }

    /// Set the fractional digit count
    #[must_use]
    pub const fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Parse a YAML document; absent fields take their defaults
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_fraction_digits > Self::MAX_FRACTION_DIGITS {
            return Err(ConfigError::value(
                "max_fraction_digits",
                format!("must be at most {}", Self::MAX_FRACTION_DIGITS),
            ));
        }
        if self.error_marker.trim().is_empty() {
            return Err(ConfigError::value("error_marker", "must not be empty"));
        }
        if self.error_marker.trim().parse::<f64>().is_ok() {
            return Err(ConfigError::value("error_marker", "must not be a number"));
        }
        Ok(())
    }
}
