//! Calculator session: one accumulator, one evaluator and a history
//!
//! Front ends call [`Session::apply`] for every input event and then read
//! [`Session::display`]. Nothing else mutates calculator state.

use crate::core::evaluator::Evaluator;
use crate::core::history::History;
use crate::core::{Accumulator, Action, CalcError, CalcResult, Number};
use crate::display::{DisplayLines, MAX_VISIBLE_CHARS};
use tracing::{debug, info, warn};

/// Result of applying one action
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// State changed without computing anything
    Updated,
    /// Evaluate, square or sqrt produced a value
    Evaluated(Number),
    /// Evaluate, square or sqrt failed; the pending operand shows `Error`
    Failed(CalcError),
}

impl Outcome {
    /// Returns true for [`Outcome::Failed`]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Calculator session
#[derive(Debug, Clone)]
pub struct Session {
    accumulator: Accumulator,
    evaluator: Evaluator,
    history: History,
    display_width: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an empty session with default history and display width
    #[must_use]
    pub fn new() -> Self {
        info!("calculator session started");
        Self {
            accumulator: Accumulator::new(),
            evaluator: Evaluator::new(),
            history: History::new(),
            display_width: MAX_VISIBLE_CHARS,
        }
    }

    /// Sets the history capacity, discarding recorded entries
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history = History::with_capacity(capacity);
        self
    }

    /// Sets how many pending characters the current line shows
    #[must_use]
    pub fn with_display_width(mut self, width: usize) -> Self {
        self.display_width = width;
        self
    }

    /// Dispatches one action
    pub fn apply(&mut self, action: Action) -> Outcome {
        debug!(
            ?action,
            committed = self.accumulator.committed(),
            pending = self.accumulator.pending(),
            "apply"
        );

        match action {
            Action::Digit(_) | Action::Point => {
                if let Some(c) = action.entry_char() {
                    self.accumulator.append_digit_or_point(c);
                }
                Outcome::Updated
            }
            Action::Operator(op) => {
                self.accumulator.append_operator(op);
                Outcome::Updated
            }
            Action::Clear => {
                self.accumulator.clear();
                Outcome::Updated
            }
            Action::Square => {
                let result = self.accumulator.square(&self.evaluator);
                Self::settle("square", result)
            }
            Action::Sqrt => {
                let result = self.accumulator.sqrt(&self.evaluator);
                Self::settle("sqrt", result)
            }
            Action::Evaluate => {
                let expression = self.accumulator.expression();
                let result = self.accumulator.evaluate(&self.evaluator);
                if let Ok(value) = &result {
                    self.history.record(&expression, &value.to_string());
                }
                Self::settle("evaluate", result)
            }
        }
    }

    /// Maps each character to an action and applies it; unbound keys are skipped
    pub fn press_keys(&mut self, keys: &str) -> Vec<Outcome> {
        keys.chars()
            .filter_map(Action::from_key)
            .map(|action| self.apply(action))
            .collect()
    }

    /// Copies the most recent result into the pending operand
    pub fn recall_last(&mut self) -> bool {
        match self.history.last() {
            Some(entry) => {
                let result = entry.result.clone();
                debug!(%result, "recall");
                self.accumulator.replace_pending(result);
                true
            }
            None => false,
        }
    }

    /// Returns the two formatted display lines
    #[must_use]
    pub fn display(&self) -> DisplayLines {
        DisplayLines::render(
            self.accumulator.committed(),
            self.accumulator.pending(),
            self.display_width,
        )
    }

    /// Read-only view of the accumulator
    #[must_use]
    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// Recorded evaluations
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Width of the current display line
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.display_width
    }

    fn settle(kind: &str, result: CalcResult<Number>) -> Outcome {
        match result {
            Ok(value) => {
                debug!(kind, %value, "computed");
                Outcome::Evaluated(value)
            }
            Err(error) => {
                warn!(kind, %error, "evaluation failed");
                Outcome::Failed(error)
            }
        }
    }
}
