//! Front-end agnostic driver
//!
//! One interface for "press keys, read the two display lines, read history",
//! so a behavioral check is written once and run against the headless
//! [`Session`] and the terminal app alike.

use crate::core::{Action, Session};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Applies one action
    fn press(&mut self, action: Action);

    /// Types a key sequence; unbound characters are skipped
    fn press_keys(&mut self, keys: &str) {
        for action in keys.chars().filter_map(Action::from_key) {
            self.press(action);
        }
    }

    /// Formatted committed expression
    fn total_line(&self) -> String;

    /// Formatted pending operand
    fn current_line(&self) -> String;

    /// Resets the expression
    fn clear(&mut self) {
        self.press(Action::Clear);
    }

    /// History entries, newest first
    fn get_history(&self) -> Vec<HistoryItem>;
}

/// A history entry as a driver reports it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// Formatted expression
    pub expression: String,
    /// Rendered result
    pub result: String,
}

fn history_items(session: &Session) -> Vec<HistoryItem> {
    session
        .history()
        .iter_rev()
        .map(|entry| HistoryItem {
            expression: crate::display::format_committed(&entry.expression),
            result: entry.result.clone(),
        })
        .collect()
}

impl CalculatorDriver for Session {
    fn press(&mut self, action: Action) {
        self.apply(action);
    }

    fn total_line(&self) -> String {
        self.display().total
    }

    fn current_line(&self) -> String {
        self.display().current
    }

    fn get_history(&self) -> Vec<HistoryItem> {
        history_items(self)
    }
}

/// Terminal driver
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{history_items, Action, CalculatorDriver, HistoryItem};
    use crate::tui::CalculatorApp;

    /// Driver wrapping the terminal app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver around a fresh app
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver around an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: Action) {
            self.app.press(action);
        }

        fn total_line(&self) -> String {
            self.app.display().total
        }

        fn current_line(&self) -> String {
            self.app.display().current
        }

        fn get_history(&self) -> Vec<HistoryItem> {
            history_items(self.app.session())
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behavioral checks =====
// These run against any CalculatorDriver implementation

/// Digits, operators and evaluate
pub fn verify_accumulation<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("12");
    assert_eq!(driver.total_line(), "");
    assert_eq!(driver.current_line(), "12");

    driver.press_keys("+");
    assert_eq!(driver.total_line(), "12 + ");
    assert_eq!(driver.current_line(), "");

    driver.press_keys("30=");
    assert_eq!(driver.total_line(), "");
    assert_eq!(driver.current_line(), "42");
    driver.clear();
}

/// Glyph rendering and clipping
pub fn verify_display<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("3+4-2*");
    assert_eq!(driver.total_line(), "3 + 4 - 2 × ");
    driver.clear();

    driver.press_keys("123456789012");
    assert_eq!(driver.current_line(), "12345678901");
    driver.clear();
}

/// Error marker and recovery
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("5/0=");
    assert_eq!(driver.current_line(), "Error");
    assert_eq!(driver.total_line(), "");

    driver.clear();
    driver.press_keys("2*3=");
    assert_eq!(driver.current_line(), "6");
    driver.clear();
}

/// Square and square root
pub fn verify_square_and_root<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("4s");
    assert_eq!(driver.current_line(), "16");
    driver.clear();

    driver.press_keys("9r");
    assert_eq!(driver.current_line(), "3.0");
    driver.clear();
}

/// History records evaluations, newest first
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("1+1=");
    driver.press_keys("c2*3=");

    let history = driver.get_history();
    assert!(history.len() >= 2);
    assert_eq!(history[0].expression, "2 × 3");
    assert_eq!(history[0].result, "6");
    assert_eq!(history[1].result, "2");
    driver.clear();
}

/// Runs every shared check
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_accumulation(driver);
    verify_display(driver);
    verify_error_recovery(driver);
    verify_square_and_root(driver);
    verify_history(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Session driver =====

    #[test]
    fn test_session_driver_full() {
        let mut session = Session::new();
        run_all_checks(&mut session);
    }

    #[test]
    fn test_session_driver_press_keys_skips_unbound() {
        let mut session = Session::new();
        CalculatorDriver::press_keys(&mut session, "1 2");
        assert_eq!(session.current_line(), "12");
    }

    // ===== TUI driver =====

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;
        use crate::tui::CalculatorApp;

        #[test]
        fn test_tui_driver_full() {
            let mut driver = TuiDriver::new();
            run_all_checks(&mut driver);
        }

        #[test]
        fn test_tui_driver_with_app() {
            let driver = TuiDriver::with_app(CalculatorApp::new());
            assert!(driver.current_line().is_empty());
            assert!(driver.app().history().is_empty());
        }

        #[test]
        fn test_tui_driver_highlights_last_key() {
            let mut driver = TuiDriver::new();
            driver.press_keys("7");
            let pressed = driver.app().keypad().pressed().map(|b| b.label.clone());
            assert_eq!(pressed.as_deref(), Some("7"));
        }
    }

    // ===== HistoryItem =====

    #[test]
    fn test_history_item_clone() {
        let item = HistoryItem {
            expression: "1 + 1".into(),
            result: "2".into(),
        };
        assert_eq!(item.clone(), item);
    }
}
