//! Discrete input events understood by the calculator

use crate::core::Operation;
use serde::{Deserialize, Serialize};

/// One button press or key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Append a digit (0-9) to the pending operand
    Digit(u8),
    /// Append a decimal point to the pending operand
    Point,
    /// Commit the pending operand followed by an operator
    Operator(Operation),
    /// Reset both expression fields
    Clear,
    /// Square the pending operand
    Square,
    /// Square root of the pending operand
    Sqrt,
    /// Evaluate committed + pending
    Evaluate,
}

impl Action {
    /// Maps a key character to an action.
    ///
    /// Digits, `.`, and `+ - * /` type; `=` or a newline evaluates;
    /// `c`/`C` clears; `s` squares; `r` takes the square root.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '0'..='9' => key.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Point),
            '=' | '\n' | '\r' => Some(Self::Evaluate),
            'c' | 'C' => Some(Self::Clear),
            's' => Some(Self::Square),
            'r' => Some(Self::Sqrt),
            _ => Operation::from_char(key).map(Self::Operator),
        }
    }

    /// Returns the character typed into the pending operand, if any
    #[must_use]
    pub fn entry_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Point => Some('.'),
            _ => None,
        }
    }

    /// Returns the keypad label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".to_string(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::Clear => "C".to_string(),
            Self::Square => "x²".to_string(),
            Self::Sqrt => "√".to_string(),
            Self::Evaluate => "=".to_string(),
        }
    }
}
