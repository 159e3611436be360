//! Tokenizer and recursive-descent parser for keypad arithmetic

use crate::error::{EvalError, EvalResult};
use crate::key::BinaryOp;

/// Token types from lexical analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Binary operator (or a unary minus, decided by the parser)
    Operator(BinaryOp),
}

/// Expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    Binary {
        /// Left operand
        left: Box<Expr>,
        /// Operator
        op: BinaryOp,
        /// Right operand
        right: Box<Expr>,
    },
    /// Unary negation
    Negate(Box<Expr>),
}

impl Expr {
    /// Creates a binary operation node
    #[must_use]
    pub fn binary(left: Self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a negation node
    #[must_use]
    pub fn negate(inner: Self) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer over ASCII infix arithmetic
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> EvalResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None at end of input
    pub fn next_token(&mut self) -> EvalResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '+' | '-' | '*' | '/' => {
                self.advance();
                // from_glyph covers every ASCII operator matched above
                let op = BinaryOp::from_glyph(ch)
                    .ok_or_else(|| EvalError::parse(format!("Unexpected character: '{ch}'")))?;
                Token::Operator(op)
            }
            _ => {
                return Err(EvalError::parse(format!("Unexpected character: '{ch}'")));
            }
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn read_number(&mut self) -> EvalResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let num_str = &self.input[start..self.pos];
        let value: f64 = num_str
            .parse()
            .map_err(|_| EvalError::parse(format!("Invalid number: '{num_str}'")))?;
        // Overlong digit runs parse as infinity
        if !value.is_finite() {
            return Err(EvalError::parse(format!(
                "Number out of range: {} digits",
                num_str.len()
            )));
        }
        Ok(Token::Number(value))
    }
}

/// Recursive descent parser
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= '-' unary | NUMBER
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a string expression into a tree
    pub fn parse_str(input: &str) -> EvalResult<Expr> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(EvalError::EmptyExpression);
        }

        let tokens = Tokenizer::new(trimmed).tokenize()?;
        let mut parser = Self::new(tokens);
        let expr = parser.parse_expression()?;

        if let Some(token) = parser.current() {
            return Err(EvalError::parse(format!(
                "Unexpected token {token:?} at position {}",
                parser.pos
            )));
        }

        Ok(expr)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> EvalResult<Expr> {
        let mut left = self.parse_term()?;

        while let Some(&Token::Operator(op @ (BinaryOp::Add | BinaryOp::Subtract))) = self.current()
        {
            self.advance();
            let right = self.parse_term()?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> EvalResult<Expr> {
        let mut left = self.parse_unary()?;

        while let Some(&Token::Operator(op @ (BinaryOp::Multiply | BinaryOp::Divide))) =
            self.current()
        {
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> EvalResult<Expr> {
        match self.advance() {
            Some(Token::Operator(BinaryOp::Subtract)) => Ok(Expr::negate(self.parse_unary()?)),
            Some(Token::Number(n)) => Ok(Expr::Number(n)),
            Some(token) => Err(EvalError::parse(format!("Unexpected token: {token:?}"))),
            None => Err(EvalError::parse("Unexpected end of expression")),
        }
    }
}
