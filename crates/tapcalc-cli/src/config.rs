//! CLI configuration

use crate::commands::{Cli, FormatArg};
use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tapcalc::EngineConfig;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - display value only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - key transitions logged
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Build from `-q` and the `-v` count
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Default tracing filter for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "tapcalc=debug,warn",
            Self::Debug => "trace",
        }
    }
}

/// Output format for engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Output format
    pub format: OutputFormat,
    /// Print state after every key
    pub each_key: bool,
    /// Engine settings
    pub engine: EngineConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set output format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set per-key output
    #[must_use]
    pub const fn with_each_key(mut self, each_key: bool) -> Self {
        self.each_key = each_key;
        self
    }

    /// Set engine settings
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Build configuration from parsed arguments, loading the engine file if given
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let engine = match &cli.config {
            Some(path) => load_engine_config(path)?,
            None => EngineConfig::default(),
        };
        Ok(Self::new()
            .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
            .with_format(cli.format.into())
            .with_each_key(cli.each)
            .with_engine(engine))
    }
}

/// Read and validate a YAML engine configuration
pub fn load_engine_config(path: &Path) -> CliResult<EngineConfig> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::config_read(path.display().to_string(), e))?;
    let config = EngineConfig::from_yaml_str(&text)?;
    tracing::debug!(path = %path.display(), ?config, "loaded engine config");
    Ok(config)
}
