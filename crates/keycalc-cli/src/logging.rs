//! Subscriber setup for `tracing`
//!
//! `RUST_LOG` overrides the level derived from `-v`/`-q`. While the terminal
//! keypad owns the screen, logs only go to `--log-file`.

use crate::config::{CliConfig, LogFormat};
use crate::error::{CliError, CliResult};
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Where log lines end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Logging disabled
    Off,
    /// Standard error
    Stderr,
    /// Append to a file
    File(std::path::PathBuf),
}

/// Picks the log destination for a run
#[must_use]
pub fn target(config: &CliConfig, interactive: bool) -> LogTarget {
    match (&config.log_file, interactive) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::Off,
        (None, false) => LogTarget::Stderr,
    }
}

/// Builds the filter: `RUST_LOG` if set, otherwise the verbosity level
#[must_use]
pub fn filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.log_level()))
}

/// Installs the global subscriber
pub fn init(config: &CliConfig, interactive: bool) -> CliResult<()> {
    match target(config, interactive) {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => install(config, std::io::stderr, console::colors_enabled_stderr()),
        LogTarget::File(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| CliError::config(format!("cannot open log file {}: {e}", path.display())))?;
            install(config, Mutex::new(file), false)
        }
    }
}

fn install<W>(config: &CliConfig, writer: W, ansi: bool) -> CliResult<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    let installed = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    installed.map_err(|e| CliError::config(format!("cannot install logger: {e}")))
}
