//! Arithmetic steps that can be replayed against an accumulator.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ParseOperationError;

/// A single accumulator step together with its operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Add(f64),
    Subtract(f64),
    Multiply(f64),
    Divide(f64),
}

impl Operation {
    /// Build an operation from an operator token and an operand token.
    ///
    /// Accepted operators: `add`/`+`, `sub`/`subtract`/`-`,
    /// `mul`/`multiply`/`*`/`x`, `div`/`divide`/`/` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ParseOperationError::UnknownOperator`] for an unrecognised
    /// operator and [`ParseOperationError::InvalidOperand`] when the operand is
    /// not a finite number.
    pub fn from_parts(operator: &str, operand: &str) -> Result<Self, ParseOperationError> {
        let ctor: fn(f64) -> Self = match operator.to_ascii_lowercase().as_str() {
            "add" | "+" => Self::Add,
            "sub" | "subtract" | "-" => Self::Subtract,
            "mul" | "multiply" | "*" | "x" => Self::Multiply,
            "div" | "divide" | "/" => Self::Divide,
            _ => return Err(ParseOperationError::UnknownOperator(operator.to_owned())),
        };

        let value: f64 = operand
            .trim()
            .parse()
            .map_err(|_| ParseOperationError::InvalidOperand(operand.to_owned()))?;
        if !value.is_finite() {
            return Err(ParseOperationError::InvalidOperand(operand.to_owned()));
        }

        Ok(ctor(value))
    }

    /// Parse a flat `operator operand operator operand ...` token list.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseOperationError`] encountered; a trailing
    /// operator without operand yields [`ParseOperationError::MissingOperand`].
    pub fn parse_sequence<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Self>, ParseOperationError> {
        let mut ops = Vec::new();
        let mut iter = tokens.iter();
        while let Some(operator) = iter.next() {
            let operator: &str = operator.as_ref();
            let operand: &str = iter
                .next()
                .ok_or_else(|| ParseOperationError::MissingOperand(operator.to_owned()))?
                .as_ref();
            ops.push(Self::from_parts(operator, operand)?);
        }
        Ok(ops)
    }

    /// The operand carried by this step.
    #[must_use]
    pub const fn operand(self) -> f64 {
        match self {
            Self::Add(n) | Self::Subtract(n) | Self::Multiply(n) | Self::Divide(n) => n,
        }
    }

    /// Operator symbol used in display output.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add(_) => '+',
            Self::Subtract(_) => '-',
            Self::Multiply(_) => '*',
            Self::Divide(_) => '/',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.operand())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Parse a single step written as `"<operator> <operand>"`, e.g. `"mul 3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let operator = parts
            .next()
            .ok_or_else(|| ParseOperationError::UnknownOperator(String::new()))?;
        let operand = parts
            .next()
            .ok_or_else(|| ParseOperationError::MissingOperand(operator.to_owned()))?;
        if let Some(extra) = parts.next() {
            return Err(ParseOperationError::InvalidOperand(format!("{operand} {extra}")));
        }
        Self::from_parts(operator, operand)
    }
}
