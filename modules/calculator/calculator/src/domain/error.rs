//! Error types for the calculator domain.

use thiserror::Error;

/// Errors raised by accumulator operations.
///
/// A failed operation never mutates the running total.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccumulatorError {
    /// Divisor was positive or negative zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors raised while parsing an [`Operation`](crate::Operation) from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseOperationError {
    /// The operator token is not one of the known spellings.
    #[error("unknown operator '{0}' (expected add, sub, mul, div or + - * /)")]
    UnknownOperator(String),

    /// The operand is not a finite number.
    #[error("invalid operand '{0}': expected a finite number")]
    InvalidOperand(String),

    /// An operator was given without an operand.
    #[error("operator '{0}' is missing its operand")]
    MissingOperand(String),
}
