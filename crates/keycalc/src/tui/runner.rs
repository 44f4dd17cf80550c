//! Terminal setup and event loop

use std::io;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info};

use super::app::CalculatorApp;
use super::input::InputHandler;
use super::ui::render;
use crate::core::Session;

/// Runs the interactive keypad until the user quits.
///
/// The terminal is restored even when the loop fails.
pub fn run(session: Session) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = CalculatorApp::with_session(session);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(evaluations = app.history().len(), "calculator closed");
    result
}

/// Draws and dispatches events until the app asks to quit
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut CalculatorApp) -> io::Result<()> {
    let handler = InputHandler::new();

    loop {
        terminal.draw(|f| render(app, f))?;

        handle_event(terminal, app, &handler, event::read()?)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Applies one terminal event to the app
pub fn handle_event<B: Backend>(
    terminal: &Terminal<B>,
    app: &mut CalculatorApp,
    handler: &InputHandler,
    event: Event,
) -> io::Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            app.handle(handler.handle_key(key));
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            let size = terminal.size()?;
            let screen = Rect::new(0, 0, size.width, size.height);
            if app.click(screen, mouse.column, mouse.row).is_none() {
                debug!(x = mouse.column, y = mouse.row, "click missed keypad");
            }
        }
        _ => {}
    }
    Ok(())
}
