//! Clickable keypad
//!
//! ```text
//! [ C ] [ x² ] [ √ ] [ ÷ ]
//! [ 7 ] [ 8  ] [ 9 ] [ × ]
//! [ 4 ] [ 5  ] [ 6 ] [ - ]
//! [ 1 ] [ 2  ] [ 3 ] [ + ]
//! [ . ] [ 0  ] [    =    ]
//! ```
//!
//! Rendering and mouse hit-testing share [`Keypad::button_rect`], so a click
//! always lands on the button drawn under the cursor.

use super::theme;
use crate::core::{Action, Operation};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Widget},
};

/// Grid rows
pub const ROWS: u16 = 5;
/// Grid columns
pub const COLS: u16 = 4;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button face
    pub label: String,
    /// Action dispatched when pressed
    pub action: Action,
    /// Grid row
    pub row: u16,
    /// First grid column
    pub col: u16,
    /// Number of columns covered
    pub span: u16,
    /// Whether the button is highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a one-cell button
    #[must_use]
    pub fn new(action: Action, row: u16, col: u16) -> Self {
        Self::spanning(action, row, col, 1)
    }

    /// Creates a button covering `span` columns
    #[must_use]
    pub fn spanning(action: Action, row: u16, col: u16, span: u16) -> Self {
        Self {
            label: action.label(),
            action,
            row,
            col,
            span,
            pressed: false,
        }
    }

    /// Returns true if the button covers grid cell (`row`, `col`)
    #[must_use]
    pub fn covers(&self, row: u16, col: u16) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let mut buttons = vec![
            KeypadButton::new(Action::Clear, 0, 0),
            KeypadButton::new(Action::Square, 0, 1),
            KeypadButton::new(Action::Sqrt, 0, 2),
        ];

        for (row, digits) in (1..).zip([[7, 8, 9], [4, 5, 6], [1, 2, 3]]) {
            for (col, d) in (0..).zip(digits) {
                buttons.push(KeypadButton::new(Action::Digit(d), row, col));
            }
        }

        for (row, op) in (0..).zip(Operation::KEYED) {
            buttons.push(KeypadButton::new(Action::Operator(op), row, 3));
        }

        buttons.push(KeypadButton::new(Action::Point, 4, 0));
        buttons.push(KeypadButton::new(Action::Digit(0), 4, 1));
        buttons.push(KeypadButton::spanning(Action::Evaluate, 4, 2, 2));

        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Index of the button covering grid cell (`row`, `col`)
    #[must_use]
    pub fn index_at(&self, row: u16, col: u16) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Index of the button that dispatches `action`
    #[must_use]
    pub fn find_button(&self, action: Action) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Returns the currently highlighted button, if any
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Highlights the button for `action` and releases the rest
    pub fn highlight(&mut self, action: Action) {
        self.release_all();
        if let Some(btn) = self.buttons.iter_mut().find(|b| b.action == action) {
            btn.pressed = true;
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Screen rectangle of button `index` when the keypad fills `area`
    #[must_use]
    pub fn button_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        let btn = self.buttons.get(index)?;
        let (inner, cell_w, cell_h) = Self::grid(area)?;
        Some(Rect {
            x: inner.x + btn.col * cell_w,
            y: inner.y + btn.row * cell_h,
            width: btn.span * cell_w,
            height: cell_h,
        })
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let (inner, cell_w, cell_h) = Self::grid(area)?;
        if x < inner.x || y < inner.y {
            return None;
        }
        let col = (x - inner.x) / cell_w;
        let row = (y - inner.y) / cell_h;
        if row >= ROWS || col >= COLS {
            return None;
        }
        self.index_at(row, col)
    }

    /// Inner area and cell size, or None when too small to draw
    fn grid(area: Rect) -> Option<(Rect, u16, u16)> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let cell_w = inner.width / COLS;
        let cell_h = inner.height / ROWS;
        if cell_w == 0 || cell_h == 0 {
            return None;
        }
        Some((inner, cell_w, cell_h))
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .style(theme::base())
            .border_style(theme::border())
            .render(area, buf);

        for (index, btn) in self.keypad.buttons().enumerate() {
            let Some(rect) = self.keypad.button_rect(area, index) else {
                return;
            };

            let style = if btn.pressed {
                theme::button_pressed()
            } else {
                theme::button()
            };

            // one-column gutter between buttons
            let face = Rect {
                width: rect.width.saturating_sub(1).max(1),
                ..rect
            };
            buf.set_style(face, style);

            let label_width = btn.label.chars().count() as u16;
            let label_x = face.x + face.width.saturating_sub(label_width) / 2;
            let label_y = face.y + face.height / 2;
            buf.set_span(
                label_x,
                label_y,
                &Span::styled(btn.label.as_str(), style),
                face.width,
            );
        }
    }
}
