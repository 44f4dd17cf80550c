//! Display formatting for the two calculator lines
//!
//! The committed expression is shown with spaced operator glyphs; the pending
//! operand is clipped to the display width. Neither function touches the
//! underlying accumulator state.

use crate::core::{Operation, ERROR_MARKER};
use serde::{Deserialize, Serialize};

/// Characters of the pending operand that fit on the current line
pub const MAX_VISIBLE_CHARS: usize = 11;

/// Renders a committed expression with display glyphs.
///
/// Every operator character becomes its glyph surrounded by single spaces,
/// so `3+4-2` renders as `3 + 4 - 2` and `3+` as `3 + `.
#[must_use]
pub fn format_committed(expression: &str) -> String {
    let mut out = String::with_capacity(expression.len() * 2);
    for c in expression.chars() {
        match Operation::from_char(c) {
            Some(op) => {
                out.push(' ');
                out.push_str(op.glyph());
                out.push(' ');
            }
            None => out.push(c),
        }
    }
    out
}

/// Renders the pending operand clipped to [`MAX_VISIBLE_CHARS`]
#[must_use]
pub fn format_pending(value: &str) -> String {
    format_pending_width(value, MAX_VISIBLE_CHARS)
}

/// Renders the pending operand clipped to `width` characters
#[must_use]
pub fn format_pending_width(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}

/// The two lines a front end shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLines {
    /// Formatted committed expression
    pub total: String,
    /// Formatted pending operand
    pub current: String,
}

impl DisplayLines {
    /// Formats raw accumulator fields with the given pending width
    #[must_use]
    pub fn render(committed: &str, pending: &str, width: usize) -> Self {
        Self {
            total: format_committed(committed),
            current: format_pending_width(pending, width),
        }
    }

    /// Returns true when the current line shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.current == ERROR_MARKER
    }
}
