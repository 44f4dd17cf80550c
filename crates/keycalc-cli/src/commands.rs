//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// keycalc: keypad calculator with a terminal front end
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// YAML configuration file
    #[arg(long, global = true, env = "KEYCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log line format
    #[arg(long, global = true)]
    pub log_format: Option<LogFormatArg>,

    /// Subcommand to run (defaults to the terminal keypad)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive terminal keypad
    Tui,

    /// Evaluate one expression and print the result
    Eval(EvalArgs),

    /// Replay keys through a fresh calculator and print the display
    Press(PressArgs),

    /// Print the effective configuration as YAML
    Config(ConfigArgs),
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Expression in keyboard form, e.g. `3+4*2` or `2**-1`
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Key sequence: digits, `.`, `+-*/`, `=` evaluate, `c` clear, `s` square, `r` root
    #[arg(allow_hyphen_values = true)]
    pub keys: String,

    /// Print both lines and history as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Print built-in defaults instead of the effective configuration
    #[arg(long)]
    pub defaults: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Log format argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogFormatArg {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

impl From<LogFormatArg> for crate::config::LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => Self::Text,
            LogFormatArg::Json => Self::Json,
        }
    }
}
