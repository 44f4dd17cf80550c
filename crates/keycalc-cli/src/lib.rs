//! keycalc CLI library
//!
//! Command-line front end for the keycalc calculator: the interactive
//! terminal keypad, one-shot expression evaluation and headless key replay.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{Cli, ColorArg, Commands, ConfigArgs, EvalArgs, LogFormatArg, PressArgs};
pub use config::{CliConfig, ColorChoice, LogFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Printer;
