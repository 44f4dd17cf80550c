//! Keyboard input mapping

use crate::core::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Dispatch a calculator action
    Press(Action),
    /// Copy the last result into the pending operand
    RecallLast,
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Maps key events to [`KeyAction`]s
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => Action::from_key(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(Action::Evaluate),
            KeyCode::Esc => KeyAction::Press(Action::Clear),
            KeyCode::Up => KeyAction::RecallLast,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    fn key(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key(KeyEvent::new(code, KeyModifiers::CONTROL))
    }

    // ===== Character keys =====

    #[test]
    fn test_digit_keys() {
        for d in 0..=9u8 {
            let c = char::from(b'0' + d);
            assert_eq!(key(KeyCode::Char(c)), KeyAction::Press(Action::Digit(d)));
        }
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(
            key(KeyCode::Char('*')),
            KeyAction::Press(Action::Operator(Operation::Multiply))
        );
        assert_eq!(
            key(KeyCode::Char('/')),
            KeyAction::Press(Action::Operator(Operation::Divide))
        );
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(key(KeyCode::Char('s')), KeyAction::Press(Action::Square));
        assert_eq!(key(KeyCode::Char('r')), KeyAction::Press(Action::Sqrt));
        assert_eq!(key(KeyCode::Char('c')), KeyAction::Press(Action::Clear));
        assert_eq!(key(KeyCode::Char('=')), KeyAction::Press(Action::Evaluate));
    }

    #[test]
    fn test_unbound_characters_ignored() {
        assert_eq!(key(KeyCode::Char('x')), KeyAction::None);
        assert_eq!(key(KeyCode::Char('(')), KeyAction::None);
    }

    // ===== Special keys =====

    #[test]
    fn test_enter_evaluates() {
        assert_eq!(key(KeyCode::Enter), KeyAction::Press(Action::Evaluate));
    }

    #[test]
    fn test_escape_clears() {
        assert_eq!(key(KeyCode::Esc), KeyAction::Press(Action::Clear));
    }

    #[test]
    fn test_up_recalls() {
        assert_eq!(key(KeyCode::Up), KeyAction::RecallLast);
    }

    #[test]
    fn test_backspace_ignored() {
        assert_eq!(key(KeyCode::Backspace), KeyAction::None);
        assert_eq!(key(KeyCode::Left), KeyAction::None);
    }

    // ===== Quit =====

    #[test]
    fn test_quit_keys() {
        assert_eq!(key(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(ctrl(KeyCode::Char('c')), KeyAction::Quit);
        assert_eq!(ctrl(KeyCode::Char('q')), KeyAction::Quit);
    }

    #[test]
    fn test_other_ctrl_combinations_ignored() {
        assert_eq!(ctrl(KeyCode::Char('l')), KeyAction::None);
        assert_eq!(ctrl(KeyCode::Char('5')), KeyAction::None);
    }
}
