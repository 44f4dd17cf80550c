//! Styled stdout output

use console::{style, Term};
use keycalc::display::DisplayLines;

/// Writes results and display lines to stdout
#[derive(Debug)]
pub struct Printer {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Printer {
    /// Create a new printer
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stdout(),
            use_color,
            quiet,
        }
    }

    /// Prints an evaluated value; printed even in quiet mode
    pub fn result(&self, value: &str) {
        let _ = self.term.write_line(&self.paint_result(value));
    }

    /// Prints the error marker
    pub fn error_marker(&self, marker: &str) {
        let _ = self.term.write_line(&self.paint_error(marker));
    }

    /// Prints both display lines; the total line is skipped in quiet mode
    pub fn lines(&self, lines: &DisplayLines) {
        if !self.quiet {
            let _ = self.term.write_line(&self.paint_total(&lines.total));
        }
        let current = if lines.is_error() {
            self.paint_error(&lines.current)
        } else {
            self.paint_result(&lines.current)
        };
        let _ = self.term.write_line(&current);
    }

    /// Prints raw text without styling
    pub fn raw(&self, text: &str) {
        let _ = self.term.write_line(text.trim_end_matches('\n'));
    }

    fn paint_result(&self, text: &str) -> String {
        if self.use_color {
            style(text).force_styling(true).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_total(&self, text: &str) -> String {
        if self.use_color {
            style(text).force_styling(true).dim().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_error(&self, text: &str) -> String {
        if self.use_color {
            style(text).force_styling(true).red().bold().to_string()
        } else {
            text.to_string()
        }
    }
}
