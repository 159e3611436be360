//! Calculator engine: key presses in, expression and display text out
//!
//! The engine holds two text buffers. `expression` accumulates every
//! completed operand/operator pair; `display` holds the operand being typed,
//! the last result, or the error marker. [`Mode`] records which of those the
//! display currently means.

use crate::config::EngineConfig;
use crate::error::KeyParseError;
use crate::evaluator::{ArithmeticEvaluator, Evaluate};
use crate::format::{format_result, number_text, parse_number};
use crate::key::{BinaryOp, Key};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the display buffer currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// An operand being composed
    #[default]
    Entering,
    /// The result of the last successful evaluation
    Evaluated,
    /// The error marker
    Error,
}

/// Observable engine state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Expression as rendered (`×` for multiplication)
    pub expression: String,
    /// Display buffer, verbatim
    pub display: String,
    /// Current mode
    pub mode: Mode,
}

type Listener = Box<dyn FnMut(&Snapshot)>;

/// Key-driven calculator state machine
pub struct Engine<E = ArithmeticEvaluator> {
    expression: String,
    display: String,
    mode: Mode,
    // An error raised by `=` right after a result keeps that result's flag
    error_after_result: bool,
    config: EngineConfig,
    evaluator: E,
    listeners: Vec<Listener>,
}

impl<E: fmt::Debug> fmt::Debug for Engine<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("expression", &self.expression)
            .field("display", &self.display)
            .field("mode", &self.mode)
            .field("error_after_result", &self.error_after_result)
            .field("config", &self.config)
            .field("evaluator", &self.evaluator)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with the built-in evaluator and default config
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine with the built-in evaluator
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_evaluator(config, ArithmeticEvaluator::new())
    }
}

impl<E: Evaluate> Engine<E> {
    /// Initial display text
    pub const ZERO: &'static str = "0";

    /// Creates an engine around a custom evaluator
    pub fn with_evaluator(config: EngineConfig, evaluator: E) -> Self {
        Self {
            expression: String::new(),
            display: Self::ZERO.to_string(),
            mode: Mode::Entering,
            error_after_result: false,
            config,
            evaluator,
            listeners: Vec::new(),
        }
    }

    /// Raw expression buffer
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Raw display buffer
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Expression buffer for rendering
    #[must_use]
    pub fn rendered_expression(&self) -> String {
        self.expression.replace('*', "×")
    }

    /// Display buffer for rendering
    #[must_use]
    pub fn rendered_display(&self) -> &str {
        &self.display
    }

    /// Current mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// True right after a successful evaluation, and through an error raised
    /// by pressing `=` again at that point
    #[must_use]
    pub fn just_evaluated(&self) -> bool {
        match self.mode {
            Mode::Evaluated => true,
            Mode::Error => self.error_after_result,
            Mode::Entering => false,
        }
    }

    /// True while the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.mode == Mode::Error
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Captures the observable state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            expression: self.rendered_expression(),
            display: self.display.clone(),
            mode: self.mode,
        }
    }

    /// Registers a callback run after every key press
    pub fn subscribe(&mut self, listener: impl FnMut(&Snapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Back to the initial state
    pub fn reset(&mut self) {
        self.expression.clear();
        self.display = Self::ZERO.to_string();
        self.mode = Mode::Entering;
        self.error_after_result = false;
    }

    /// Applies one key press
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Clear => self.reset(),
            Key::Digit(_) => self.push_digit(key),
            // Only C and digits leave the error state
            _ if self.mode == Mode::Error => {
                tracing::debug!(%key, "ignored while showing error");
            }
            Key::Decimal => self.push_decimal(),
            Key::Operator(op) => self.push_operator(op),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
            Key::Equals => self.evaluate(),
        }

        tracing::debug!(
            %key,
            expression = %self.expression,
            display = %self.display,
            mode = ?self.mode,
            "key handled"
        );
        self.notify();
    }

    /// Parses and applies a single key label
    pub fn press(&mut self, label: &str) -> Result<(), KeyParseError> {
        let key = label.parse()?;
        self.handle_key(key);
        Ok(())
    }

    /// Parses every whitespace-separated label first, then applies them in order
    pub fn press_all(&mut self, labels: &str) -> Result<(), KeyParseError> {
        let keys = labels
            .split_whitespace()
            .map(str::parse::<Key>)
            .collect::<Result<Vec<Key>, _>>()?;
        for key in keys {
            self.handle_key(key);
        }
        Ok(())
    }

    fn push_digit(&mut self, key: Key) {
        let Some(ch) = key.digit_char() else {
            tracing::warn!(?key, "digit out of range");
            return;
        };

        if self.mode != Mode::Entering {
            self.display = ch.to_string();
            self.expression.clear();
            self.mode = Mode::Entering;
            self.error_after_result = false;
        } else if self.display == Self::ZERO {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
    }

    fn push_decimal(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn push_operator(&mut self, op: BinaryOp) {
        if self.mode == Mode::Evaluated {
            self.expression = format!("{} {} ", self.display, op.glyph());
            self.mode = Mode::Entering;
        } else {
            self.expression.push_str(&format!("{} {} ", self.display, op.glyph()));
        }
        self.display = Self::ZERO.to_string();
    }

    fn toggle_sign(&mut self) {
        if let Some(rest) = self.display.strip_prefix('-') {
            self.display = rest.to_string();
        } else if self.display != Self::ZERO {
            self.display.insert(0, '-');
        }
    }

    fn percent(&mut self) {
        let n = parse_number(&self.display);
        if n.is_finite() {
            self.display = number_text(n / 100.0);
        } else {
            tracing::warn!(display = %self.display, "operand out of range");
            self.fail();
        }
    }

    fn evaluate(&mut self) {
        let mut exp = self.expression.clone();
        if exp.is_empty() || ends_with_operator(&exp) {
            exp.push_str(&self.display);
        }

        let text = translate(&exp);
        tracing::trace!(expression = %exp, translated = %text, "evaluating");

        match self.evaluator.evaluate(&text) {
            Ok(value) if value.is_finite() => {
                self.display = format_result(value, self.config.max_fraction_digits);
                self.expression = format!("{exp} =");
                self.mode = Mode::Evaluated;
            }
            Ok(value) => {
                tracing::warn!(expression = %text, %value, "non-finite result");
                self.fail();
            }
            Err(err) => {
                tracing::warn!(
                    expression = %text,
                    error = %err,
                    kind = ?err.kind(),
                    "evaluation failed"
                );
                self.fail();
            }
        }
    }

    /// Shows the error marker; `expression` is left as it was
    fn fail(&mut self) {
        self.error_after_result = self.just_evaluated();
        self.display = self.config.error_marker.clone();
        self.mode = Mode::Error;
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

fn ends_with_operator(expression: &str) -> bool {
    expression
        .trim_end()
        .chars()
        .next_back()
        .is_some_and(|ch| BinaryOp::ALL.iter().any(|op| op.glyph() == ch))
}

/// Rewrites interface glyphs into evaluator syntax
fn translate(expression: &str) -> String {
    let ascii = BinaryOp::ALL.iter().fold(expression.to_string(), |text, op| {
        text.replace(op.glyph(), &op.ascii().to_string())
    });
    ascii
        .split(' ')
        .map(|token| if token == "%" { "/100" } else { token })
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
