//! Dark palette for the terminal front end

use ratatui::style::{Color, Modifier, Style};

/// Window background
pub const BACKGROUND: Color = Color::Rgb(0x12, 0x12, 0x12);
/// Keypad button face
pub const BUTTON: Color = Color::Rgb(0x2E, 0x2E, 0x2E);
/// Display panel background
pub const DISPLAY: Color = Color::Rgb(0x32, 0x32, 0x32);
/// Button labels and the total line
pub const LABEL: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
/// Current line
pub const TEXT: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
/// Current line while it shows `Error`
pub const ERROR: Color = Color::Rgb(0xFF, 0x47, 0x47);
/// Face of the most recently pressed button
pub const HIGHLIGHT: Color = Color::Yellow;
/// Panel borders
pub const BORDER: Color = Color::DarkGray;

/// Base style for every panel
#[must_use]
pub fn base() -> Style {
    Style::default().fg(LABEL).bg(BACKGROUND)
}

/// Style for an idle keypad button
#[must_use]
pub fn button() -> Style {
    Style::default().fg(LABEL).bg(BUTTON)
}

/// Style for the highlighted keypad button
#[must_use]
pub fn button_pressed() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Style for the current display line
#[must_use]
pub fn current_line(is_error: bool) -> Style {
    let fg = if is_error { ERROR } else { TEXT };
    Style::default()
        .fg(fg)
        .bg(DISPLAY)
        .add_modifier(Modifier::BOLD)
}

/// Style for panel borders
#[must_use]
pub fn border() -> Style {
    Style::default().fg(BORDER).bg(BACKGROUND)
}
