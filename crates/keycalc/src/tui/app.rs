//! Terminal application state
//!
//! Wraps a [`Session`] with the presentation-only bits: keypad highlight,
//! last outcome for the status line, and the quit flag.

use super::input::KeyAction;
use super::keypad::Keypad;
use super::ui::layout_areas;
use crate::core::history::History;
use crate::core::{Action, Outcome, Session};
use crate::display::DisplayLines;
use ratatui::layout::Rect;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    session: Session,
    keypad: Keypad,
    last_outcome: Option<Outcome>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app around a fresh session
    #[must_use]
    pub fn new() -> Self {
        Self::with_session(Session::new())
    }

    /// Creates an app around an existing session
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            keypad: Keypad::new(),
            last_outcome: None,
            should_quit: false,
        }
    }

    /// The underlying session
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Keypad with its highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Outcome of the most recent action
    #[must_use]
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    /// Current display lines
    #[must_use]
    pub fn display(&self) -> DisplayLines {
        self.session.display()
    }

    /// Recorded evaluations
    #[must_use]
    pub fn history(&self) -> &History {
        self.session.history()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatches an action and highlights its button
    pub fn press(&mut self, action: Action) -> Outcome {
        self.keypad.highlight(action);
        let outcome = self.session.apply(action);
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    /// Types a key character; unbound characters are ignored
    pub fn press_char(&mut self, key: char) -> Option<Outcome> {
        Action::from_key(key).map(|action| self.press(action))
    }

    /// Copies the last result into the pending operand
    pub fn recall_last(&mut self) {
        self.keypad.release_all();
        if self.session.recall_last() {
            self.last_outcome = Some(Outcome::Updated);
        }
    }

    /// Applies a mapped key action
    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(action) => {
                self.press(action);
            }
            KeyAction::RecallLast => self.recall_last(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Presses the keypad button under a mouse click on a screen of size `screen`
    pub fn click(&mut self, screen: Rect, x: u16, y: u16) -> Option<Outcome> {
        let area = layout_areas(screen).keypad;
        let index = self.keypad.hit_test(area, x, y)?;
        let action = self.keypad.get_button(index)?.action;
        Some(self.press(action))
    }

    /// One-line status describing the last outcome
    #[must_use]
    pub fn status(&self) -> String {
        match &self.last_outcome {
            None => "Ready".into(),
            Some(Outcome::Updated) => String::new(),
            Some(Outcome::Evaluated(value)) => format!("= {value}"),
            Some(Outcome::Failed(e)) => format!("Error: {e}"),
        }
    }
}
