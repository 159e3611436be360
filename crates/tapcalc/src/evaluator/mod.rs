//! Math expression evaluation
//!
//! The engine talks to its evaluator through [`Evaluate`] only. The built-in
//! [`ArithmeticEvaluator`] covers the four keypad operators over `f64`.

pub mod parser;

use crate::error::{EvalError, EvalResult};
use crate::key::BinaryOp;
use parser::{Expr, Parser};

/// Evaluates ASCII infix arithmetic (`+ - * /`) to a real number
pub trait Evaluate {
    /// Evaluates `text` with no variable bindings
    fn evaluate(&self, text: &str) -> EvalResult<f64>;
}

impl<F> Evaluate for F
where
    F: Fn(&str) -> EvalResult<f64>,
{
    fn evaluate(&self, text: &str) -> EvalResult<f64> {
        self(text)
    }
}

/// Built-in evaluator for keypad arithmetic
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticEvaluator;

impl ArithmeticEvaluator {
    /// Creates a new evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Walks an expression tree
    pub fn evaluate_expr(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number(n) => Ok(*n),
            Expr::Negate(inner) => Ok(-self.evaluate_expr(inner)?),
            Expr::Binary { left, op, right } => {
                let a = self.evaluate_expr(left)?;
                let b = self.evaluate_expr(right)?;
                apply(a, *op, b)
            }
        }
    }
}

impl Evaluate for ArithmeticEvaluator {
    fn evaluate(&self, text: &str) -> EvalResult<f64> {
        let expr = Parser::parse_str(text)?;
        self.evaluate_expr(&expr).and_then(check_finite)
    }
}

fn apply(a: f64, op: BinaryOp, b: f64) -> EvalResult<f64> {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Subtract => a - b,
        BinaryOp::Multiply => a * b,
        BinaryOp::Divide => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        }
    };
    check_finite(result)
}

fn check_finite(result: f64) -> EvalResult<f64> {
    if result.is_nan() {
        Err(EvalError::InvalidResult("NaN".into()))
    } else if result.is_infinite() {
        Err(EvalError::InvalidResult("Infinity".into()))
    } else {
        Ok(result)
    }
}
