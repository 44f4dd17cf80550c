//! Screen layout and rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use super::theme;

/// Window title
pub const TITLE: &str = " keycalc ";

/// Key help shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Digits"),
    ("+-*/", "Operators"),
    ("Enter =", "Evaluate"),
    ("Esc c", "Clear"),
    ("s", "Square"),
    ("r", "Square root"),
    ("↑", "Recall"),
    ("Click", "Press"),
    ("q", "Quit"),
];

/// History rows shown at most
const HISTORY_ROWS: usize = 10;

/// Screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiAreas {
    /// Total and current lines
    pub display: Rect,
    /// Last outcome
    pub status: Rect,
    /// Past evaluations
    pub history: Rect,
    /// Clickable keypad
    pub keypad: Rect,
    /// Key help
    pub help: Rect,
}

/// Splits the screen into regions; used for both drawing and hit-testing
#[must_use]
pub fn layout_areas(area: Rect) -> UiAreas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(24),
            Constraint::Length(30),
            Constraint::Length(24),
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(columns[0]);

    UiAreas {
        display: rows[0],
        status: rows[1],
        history: rows[2],
        keypad: columns[1],
        help: columns[2],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    frame.render_widget(CalculatorUI::new(app), frame.area());
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let lines = self.app.display();
        let display_style = Style::default().fg(theme::LABEL).bg(theme::DISPLAY);

        let text = vec![
            Line::from(Span::styled(lines.total.clone(), display_style)),
            Line::from(Span::styled(
                lines.current.clone(),
                theme::current_line(lines.is_error()),
            )),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Right)
            .style(display_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(display_style)
                    .border_style(theme::border()),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let status = self.app.status();
        let style = if status.starts_with("Error") {
            Style::default().fg(theme::ERROR)
        } else {
            Style::default().fg(theme::LABEL)
        };

        Paragraph::new(Span::styled(status, style))
            .style(theme::base())
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(theme::border()),
            )
            .render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let history = self.app.history();
        let title = format!(" History {}/{} ", history.len(), history.max_entries());
        let items: Vec<ListItem> = history
            .last_n(HISTORY_ROWS)
            .into_iter()
            .map(|entry| ListItem::new(Span::raw(entry.display())))
            .collect();

        List::new(items)
            .style(theme::base())
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(theme::border()),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let key_style = Style::default()
            .fg(theme::HIGHLIGHT)
            .add_modifier(Modifier::BOLD);

        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>8}"), key_style),
                    Span::raw(" "),
                    Span::raw(*desc),
                ]))
            })
            .collect();

        List::new(items)
            .style(theme::base())
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(theme::border()),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .style(theme::base())
            .border_style(theme::border())
            .render(area, buf);

        let areas = layout_areas(area);
        self.render_display(areas.display, buf);
        self.render_status(areas.status, buf);
        self.render_history(areas.history, buf);
        KeypadWidget::new(self.app.keypad()).render(areas.keypad, buf);
        Self::render_help(areas.help, buf);
    }
}
