//! Terminal front end
//!
//! Presentation only: every input becomes an [`Action`](crate::core::Action)
//! applied to the wrapped session, then the screen is redrawn.

mod app;
mod input;
mod keypad;
mod runner;
pub mod theme;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use runner::{handle_event, run, run_app};
pub use ui::{layout_areas, render, CalculatorUI, UiAreas};
