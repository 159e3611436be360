//! Key identifiers delivered by the presentation layer
//!
//! Every button on the keypad maps to exactly one [`Key`]. Labels parse back
//! into keys so a text front end can drive the engine with the same faces the
//! buttons show.

use crate::error::KeyParseError;
use std::fmt;
use std::str::FromStr;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl BinaryOp {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the glyph shown on the keypad and in the expression buffer
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Returns the ASCII symbol understood by the evaluator
    #[must_use]
    pub const fn ascii(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Maps a glyph or one of its ASCII aliases to an operator
    #[must_use]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '×' | '*' | 'x' | 'X' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(BinaryOp),
    /// Sign toggle (+/-)
    ToggleSign,
    /// Percent: divide the displayed operand by 100
    Percent,
    /// Clear everything
    Clear,
    /// Evaluate
    Equals,
}

impl Key {
    /// The standard keypad, row by row
    pub const ALL: [Self; 19] = [
        Self::Clear,
        Self::ToggleSign,
        Self::Percent,
        Self::Operator(BinaryOp::Divide),
        Self::Digit(7),
        Self::Digit(8),
        Self::Digit(9),
        Self::Operator(BinaryOp::Multiply),
        Self::Digit(4),
        Self::Digit(5),
        Self::Digit(6),
        Self::Operator(BinaryOp::Subtract),
        Self::Digit(1),
        Self::Digit(2),
        Self::Digit(3),
        Self::Operator(BinaryOp::Add),
        Self::Digit(0),
        Self::Decimal,
        Self::Equals,
    ];

    /// Creates a digit key, rejecting values above 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Returns the character a digit key contributes, if any
    #[must_use]
    pub fn digit_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            _ => None,
        }
    }

    /// Returns the button label for this key
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Percent => "%".to_string(),
            Self::Clear => "C".to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let key = match label {
            "." | "," => Self::Decimal,
            "+/-" | "±" | "neg" => Self::ToggleSign,
            "%" => Self::Percent,
            "C" | "c" | "AC" | "Escape" | "Esc" => Self::Clear,
            "=" | "Enter" => Self::Equals,
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => ch
                        .to_digit(10)
                        .and_then(|d| u8::try_from(d).ok())
                        .and_then(Self::digit)
                        .or_else(|| BinaryOp::from_glyph(ch).map(Self::Operator))
                        .ok_or_else(|| KeyParseError::new(label))?,
                    _ => return Err(KeyParseError::new(label)),
                }
            }
        };
        Ok(key)
    }
}
