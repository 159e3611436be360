//! Drives an engine from text input and renders its state

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tapcalc::{Engine, Key, Snapshot};

/// Words that end an interactive session
const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// A calculator session bound to one engine
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    config: CliConfig,
    pending: Rc<RefCell<Vec<Snapshot>>>,
}

impl Session {
    /// Creates a session; with `each_key` every key press is queued for output
    #[must_use]
    pub fn new(config: CliConfig) -> Self {
        let mut engine = Engine::with_config(config.engine.clone());
        let pending = Rc::new(RefCell::new(Vec::new()));
        if config.each_key {
            let sink = Rc::clone(&pending);
            engine.subscribe(move |snapshot: &Snapshot| sink.borrow_mut().push(snapshot.clone()));
        }
        Self {
            engine,
            config,
            pending,
        }
    }

    /// Underlying engine
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Presses every key in order and prints the result; any unknown label aborts
    /// before a single key is pressed
    pub fn run_keys<W: Write>(&mut self, labels: &[String], out: &mut W) -> CliResult<()> {
        let keys = labels
            .iter()
            .map(|label| label.parse::<Key>())
            .collect::<Result<Vec<_>, _>>()?;
        for key in keys {
            self.engine.handle_key(key);
        }
        self.flush(out)
    }

    /// Reads lines of key labels until EOF or a quit word
    ///
    /// Unknown labels are reported on `err` and skipped.
    pub fn run_interactive<R, W, E>(&mut self, input: R, out: &mut W, err: &mut E) -> CliResult<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if QUIT_WORDS.contains(&line) {
                break;
            }

            for label in line.split_whitespace() {
                if let Err(e) = self.engine.press(label) {
                    tracing::debug!(%label, "skipping unknown key");
                    writeln!(err, "{e}")?;
                }
            }
            self.flush(out)?;
        }
        Ok(())
    }

    /// Writes queued per-key states, or the current state
    fn flush<W: Write>(&mut self, out: &mut W) -> CliResult<()> {
        if self.config.each_key {
            let snapshots: Vec<Snapshot> = self.pending.borrow_mut().drain(..).collect();
            for snapshot in &snapshots {
                self.render(snapshot, out)?;
            }
        } else {
            let snapshot = self.engine.snapshot();
            self.render(&snapshot, out)?;
        }
        out.flush()?;
        Ok(())
    }

    fn render<W: Write>(&self, snapshot: &Snapshot, out: &mut W) -> CliResult<()> {
        match self.config.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(snapshot)?)?,
            OutputFormat::Text => {
                let quiet = self.config.verbosity.is_quiet();
                writeln!(out, "{}", render_text(snapshot, quiet))?;
            }
        }
        Ok(())
    }
}

/// One-line text rendering: `expression | display`
#[must_use]
pub fn render_text(snapshot: &Snapshot, quiet: bool) -> String {
    if quiet || snapshot.expression.is_empty() {
        snapshot.display.clone()
    } else {
        format!("{} | {}", snapshot.expression.trim_end(), snapshot.display)
    }
}
