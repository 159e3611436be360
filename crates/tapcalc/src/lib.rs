//! tapcalc - expression accumulation and evaluation for keypad calculators
//!
//! Turns a stream of discrete key presses into an arithmetic expression,
//! evaluates it when `=` arrives, and formats the result back into display
//! text. Rendering, layout and input handling belong to the caller, which
//! feeds [`Key`]s into [`Engine::handle_key`] and reads the two observable
//! strings back.
//!
//! # Example
//!
//! ```rust
//! use tapcalc::prelude::*;
//!
//! let mut engine = Engine::new();
//! for key in ["5", "+", "3", "×", "2", "="] {
//!     engine.press(key).unwrap();
//! }
//! assert_eq!(engine.rendered_expression(), "5 + 3 × 2 =");
//! assert_eq!(engine.rendered_display(), "11");
//!
//! engine.handle_key(Key::Clear);
//! assert_eq!(engine.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod key;

pub use config::EngineConfig;
pub use engine::{Engine, Mode, Snapshot};
pub use error::{ConfigError, ErrorKind, EvalError, EvalResult, KeyParseError};
pub use evaluator::{ArithmeticEvaluator, Evaluate};
pub use key::{BinaryOp, Key};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::engine::{Engine, Mode, Snapshot};
    pub use crate::error::{EvalError, EvalResult, KeyParseError};
    pub use crate::evaluator::{ArithmeticEvaluator, Evaluate};
    pub use crate::key::{BinaryOp, Key};
}
