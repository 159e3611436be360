//! tapcalc: keypad calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! tapcalc 5 + 3 × 2 =             # prints "5 + 3 × 2 = | 11"
//! tapcalc --format json 1 ÷ 3 =   # JSON snapshot
//! tapcalc                         # interactive, one line of keys at a time
//! ```

use clap::Parser;
use std::io;
use std::process::ExitCode;
use tapcalc_cli::{logging, Cli, CliConfig, CliResult, Session};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli)?;
    logging::init(config.verbosity);
    tracing::debug!(?config, "starting session");

    let mut session = Session::new(config);
    let mut stdout = io::stdout().lock();

    if cli.keys.is_empty() {
        let stdin = io::stdin().lock();
        let mut stderr = io::stderr().lock();
        session.run_interactive(stdin, &mut stdout, &mut stderr)
    } else {
        session.run_keys(&cli.keys, &mut stdout)
    }
}
