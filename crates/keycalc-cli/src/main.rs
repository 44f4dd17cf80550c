//! keycalc: keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! keycalc                      # Open the terminal keypad
//! keycalc eval "3+4*2"         # Evaluate one expression
//! keycalc press "12+7="        # Replay keys, print both display lines
//! keycalc press --json "5s="   # Same, as JSON with history
//! keycalc config --defaults    # Print default configuration
//! ```

use clap::Parser;
use keycalc_cli::{
    handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, LogFormat, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    logging::init(&config, interactive)?;
    tracing::debug!(?config, "configuration");

    match cli.command {
        None | Some(Commands::Tui) => handlers::execute_tui(&config),
        Some(Commands::Eval(args)) => handlers::execute_eval(&config, &args),
        Some(Commands::Press(args)) => handlers::execute_press(&config, &args),
        Some(Commands::Config(args)) => handlers::execute_config(&config, &args),
    }
}

/// Layers the optional config file under command-line flags
fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::new(),
    };

    if let Some(verbosity) = verbosity_from_flags(cli.quiet, cli.verbose) {
        config = config.with_verbosity(verbosity);
    }

    let color: ColorChoice = cli.color.clone().into();
    if color != ColorChoice::Auto {
        config = config.with_color(color);
    }

    if let Some(path) = &cli.log_file {
        config = config.with_log_file(path.clone());
    }
    if let Some(format) = cli.log_format {
        config = config.with_log_format(LogFormat::from(format));
    }

    Ok(config)
}

/// `None` leaves the configured verbosity alone
fn verbosity_from_flags(quiet: bool, verbose: u8) -> Option<Verbosity> {
    if quiet {
        return Some(Verbosity::Quiet);
    }
    match verbose {
        0 => None,
        1 => Some(Verbosity::Verbose),
        _ => Some(Verbosity::Debug),
    }
}
