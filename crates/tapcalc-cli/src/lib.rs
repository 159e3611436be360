//! tapcalc CLI library
//!
//! Terminal presentation layer for the [`tapcalc`] engine: argument parsing,
//! configuration loading, logging setup and the line-oriented session loop.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod session;

pub use commands::{Cli, FormatArg};
pub use config::{load_engine_config, CliConfig, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use session::{render_text, Session};
