//! Command handlers, one module per subcommand

pub mod config;
pub mod eval;
pub mod press;
pub mod tui;

pub use config::execute_config;
pub use eval::execute_eval;
pub use press::{execute_press, PressReport};
pub use tui::execute_tui;
