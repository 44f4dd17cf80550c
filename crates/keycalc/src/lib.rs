//! keycalc - keypad calculator
//!
//! A two-field expression accumulator (committed expression plus pending
//! operand) driven by discrete key actions, an arithmetic evaluator built on
//! an explicit tokenizer and recursive-descent parser, and a display
//! formatter. The optional `tui` feature adds a terminal keypad.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut session = Session::new();
//! session.press_keys("3+4");
//! assert_eq!(session.display().total, "3 + ");
//! assert_eq!(session.display().current, "4");
//!
//! session.apply(Action::Evaluate);
//! assert_eq!(session.display().current, "7");
//!
//! session.press_keys("/0=");
//! assert_eq!(session.display().current, "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod display;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{
        Accumulator, Action, CalcError, CalcResult, Number, Operation, Outcome, Session,
        ERROR_MARKER,
    };
    pub use crate::display::{format_committed, format_pending, DisplayLines, MAX_VISIBLE_CHARS};
    pub use crate::driver::{CalculatorDriver, HistoryItem};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
