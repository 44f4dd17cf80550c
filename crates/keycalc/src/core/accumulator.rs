//! Expression accumulator: the calculator's two-field state machine
//!
//! `committed` holds operands and operators already finalized and is either
//! empty or ends in an operator. `pending` holds the operand being typed or,
//! right after an evaluation, the result (or [`ERROR_MARKER`]).

use crate::core::evaluator::Evaluator;
use crate::core::{CalcResult, Number, Operation};

/// Pending-operand text shown after a failed evaluation
pub const ERROR_MARKER: &str = "Error";

/// Committed expression plus pending operand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    committed: String,
    pending: String,
}

impl Accumulator {
    /// Creates an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the committed expression (machine form)
    #[must_use]
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Returns the pending operand
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Returns committed + pending, the string `evaluate` would see
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{}{}", self.committed, self.pending)
    }

    /// Returns true when the pending operand shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.pending == ERROR_MARKER
    }

    /// Appends a digit or `.` to the pending operand.
    ///
    /// No validation: `1.2.3` is accepted here and fails when evaluated.
    /// Returns false (and changes nothing) for any other character.
    pub fn append_digit_or_point(&mut self, token: char) -> bool {
        if token.is_ascii_digit() || token == '.' {
            self.pending.push(token);
            true
        } else {
            false
        }
    }

    /// Attaches `op` to the pending operand and commits both.
    ///
    /// `3` then `+` leaves committed = `3+` and pending empty.
    pub fn append_operator(&mut self, op: Operation) {
        self.pending.push_str(op.symbol());
        self.flush();
    }

    /// Resets both fields
    pub fn clear(&mut self) {
        self.committed.clear();
        self.pending.clear();
    }

    /// Replaces the pending operand with its square
    pub fn square(&mut self, evaluator: &Evaluator) -> CalcResult<Number> {
        self.raise(evaluator, Number::Integer(2))
    }

    /// Replaces the pending operand with its square root
    pub fn sqrt(&mut self, evaluator: &Evaluator) -> CalcResult<Number> {
        self.raise(evaluator, Number::Real(0.5))
    }

    /// Flushes the pending operand and evaluates the whole expression.
    ///
    /// Either way the committed expression ends up empty: on success the
    /// pending operand becomes the result, on failure the error marker. The
    /// returned error is informational; the state has already recovered.
    pub fn evaluate(&mut self, evaluator: &Evaluator) -> CalcResult<Number> {
        self.flush();
        let expression = std::mem::take(&mut self.committed);

        match evaluator.evaluate_str(&expression) {
            Ok(value) => {
                self.pending = value.to_string();
                Ok(value)
            }
            Err(e) => {
                self.recover();
                Err(e)
            }
        }
    }

    /// Overwrites the pending operand, e.g. when recalling a past result
    pub fn replace_pending(&mut self, value: impl Into<String>) {
        self.pending = value.into();
    }

    fn raise(&mut self, evaluator: &Evaluator, exponent: Number) -> CalcResult<Number> {
        match evaluator.power(&self.pending, exponent) {
            Ok(value) => {
                self.pending = value.to_string();
                Ok(value)
            }
            Err(e) => {
                self.recover();
                Err(e)
            }
        }
    }

    fn flush(&mut self) {
        self.committed.push_str(&self.pending);
        self.pending.clear();
    }

    fn recover(&mut self) {
        self.committed.clear();
        self.pending = ERROR_MARKER.to_string();
    }
}
