//! CLI command definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// tapcalc: keypad calculator in the terminal
///
/// Keys are the labels printed on the keypad: 0-9 . + - × ÷ +/- % C =
/// (`*`, `x` and `/` work too). Given keys on the command line, tapcalc
/// presses them in order and prints the final state. Without keys it reads
/// stdin, pressing every key on a line and printing the state after each line.
#[derive(Parser, Debug)]
#[command(name = "tapcalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only print the display value)
    #[arg(short, long)]
    pub quiet: bool,

    /// YAML engine configuration file
    #[arg(short, long, env = "TAPCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Print the state after every key instead of once per line
    #[arg(long)]
    pub each: bool,

    /// Keys to press
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub keys: Vec<String>,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// `expression | display`
    #[default]
    Text,
    /// One JSON object per state
    Json,
}
