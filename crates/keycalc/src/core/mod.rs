//! Calculator core: accumulator state machine, arithmetic, parser, evaluator
//!
//! Everything in here is pure logic. Front ends dispatch [`Action`]s to a
//! [`Session`] and read back the two display lines.

pub mod accumulator;
pub mod action;
pub mod evaluator;
pub mod history;
pub mod number;
mod operations;
pub mod parser;
pub mod session;

pub use accumulator::{Accumulator, ERROR_MARKER};
pub use action::Action;
pub use number::Number;
pub use operations::{Arithmetic, Operation};
pub use session::{Outcome, Session};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Evaluation failure.
///
/// At the accumulator boundary every variant collapses into the single
/// `Error` marker; the variants are kept apart for logs and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division (or a negative power) of zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is too large to represent
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Nothing to evaluate
    #[error("Empty expression")]
    EmptyExpression,
    /// Result is not a real number
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}

impl CalcError {
    /// Create a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }
}
