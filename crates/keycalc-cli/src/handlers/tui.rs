//! Tui command handler

use crate::config::CliConfig;
use crate::error::CliResult;

/// Execute the tui command
#[cfg(feature = "tui")]
pub fn execute_tui(config: &CliConfig) -> CliResult<()> {
    tracing::info!(width = config.display_width, "starting terminal keypad");
    keycalc::tui::run(config.session())?;
    Ok(())
}

/// Execute the tui command
#[cfg(not(feature = "tui"))]
pub fn execute_tui(_config: &CliConfig) -> CliResult<()> {
    Err(crate::error::CliError::invalid_argument(
        "terminal keypad not available: built without the `tui` feature",
    ))
}
