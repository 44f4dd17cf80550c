//! CLI configuration
//!
//! Defaults, then an optional YAML file, then command-line flags.

use crate::error::{CliError, CliResult};
use keycalc::core::history::History;
use keycalc::core::Session;
use keycalc::display::MAX_VISIBLE_CHARS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Informational messages
    Verbose,
    /// Every action
    Debug,
}

impl Verbosity {
    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default log filter directive for this level
    #[must_use]
    pub const fn log_level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::Term::stdout().features().colors_supported(),
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Characters of the pending operand shown on the current line
    pub display_width: usize,
    /// Successful evaluations kept in history
    pub history_capacity: usize,
    /// Log destination; stderr when unset (off in the terminal keypad)
    pub log_file: Option<PathBuf>,
    /// Log line format
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            display_width: MAX_VISIBLE_CHARS,
            history_capacity: History::DEFAULT_MAX_ENTRIES,
            log_file: None,
            log_format: LogFormat::Text,
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML document; missing keys keep their defaults
    pub fn from_yaml(yaml: &str) -> CliResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()
    }

    /// Loads a YAML configuration file
    pub fn load(path: &Path) -> CliResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&yaml)
    }

    /// Serializes the configuration as YAML
    pub fn to_yaml(&self) -> CliResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Rejects values the calculator cannot use
    pub fn validate(self) -> CliResult<Self> {
        if self.display_width == 0 {
            return Err(CliError::config("display_width must be at least 1"));
        }
        Ok(self)
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set display width
    #[must_use]
    pub const fn with_display_width(mut self, width: usize) -> Self {
        self.display_width = width;
        self
    }

    /// Set history capacity
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Set log format
    #[must_use]
    pub const fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Builds a calculator session honouring this configuration
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new()
            .with_display_width(self.display_width)
            .with_history_capacity(self.history_capacity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod verbosity_tests {
        use super::*;

        #[test]
        fn test_default_verbosity() {
            assert_eq!(Verbosity::default(), Verbosity::Normal);
        }

        #[test]
        fn test_is_quiet() {
            assert!(Verbosity::Quiet.is_quiet());
            assert!(!Verbosity::Normal.is_quiet());
        }

        #[test]
        fn test_is_verbose() {
            assert!(!Verbosity::Normal.is_verbose());
            assert!(Verbosity::Verbose.is_verbose());
            assert!(Verbosity::Debug.is_verbose());
        }

        #[test]
        fn test_log_levels() {
            assert_eq!(Verbosity::Quiet.log_level(), "error");
            assert_eq!(Verbosity::Normal.log_level(), "warn");
            assert_eq!(Verbosity::Verbose.log_level(), "info");
            assert_eq!(Verbosity::Debug.log_level(), "debug");
        }
    }

    mod color_tests {
        use super::*;

        #[test]
        fn test_explicit_choices() {
            assert!(ColorChoice::Always.should_color());
            assert!(!ColorChoice::Never.should_color());
        }
    }

    mod config_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = CliConfig::new();
            assert_eq!(config.display_width, 11);
            assert_eq!(config.history_capacity, 100);
            assert!(config.log_file.is_none());
            assert_eq!(config.log_format, LogFormat::Text);
        }

        #[test]
        fn test_builders() {
            let config = CliConfig::new()
                .with_verbosity(Verbosity::Debug)
                .with_color(ColorChoice::Never)
                .with_display_width(8)
                .with_history_capacity(3)
                .with_log_file("calc.log")
                .with_log_format(LogFormat::Json);
            assert_eq!(config.verbosity, Verbosity::Debug);
            assert_eq!(config.color, ColorChoice::Never);
            assert_eq!(config.display_width, 8);
            assert_eq!(config.history_capacity, 3);
            assert_eq!(config.log_file, Some(PathBuf::from("calc.log")));
            assert_eq!(config.log_format, LogFormat::Json);
        }

        #[test]
        fn test_from_yaml_partial() {
            let config = CliConfig::from_yaml("display_width: 6\ncolor: never\n").unwrap();
            assert_eq!(config.display_width, 6);
            assert_eq!(config.color, ColorChoice::Never);
            assert_eq!(config.history_capacity, 100);
        }

        #[test]
        fn test_from_yaml_empty_document() {
            assert_eq!(CliConfig::from_yaml("{}").unwrap(), CliConfig::default());
        }

        #[test]
        fn test_from_yaml_unknown_key() {
            let err = CliConfig::from_yaml("bogus: 1\n").unwrap_err();
            assert!(matches!(err, CliError::Yaml(_)));
        }

        #[test]
        fn test_from_yaml_zero_width() {
            let err = CliConfig::from_yaml("display_width: 0\n").unwrap_err();
            assert!(err.to_string().contains("display_width"));
        }

        #[test]
        fn test_yaml_round_trip() {
            let config = CliConfig::new().with_display_width(5).with_log_file("x.log");
            let yaml = config.to_yaml().unwrap();
            assert!(yaml.contains("display_width: 5"));
            assert_eq!(CliConfig::from_yaml(&yaml).unwrap(), config);
        }

        #[test]
        fn test_load_missing_file() {
            let err = CliConfig::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
            assert!(matches!(err, CliError::Config { .. }));
        }

        #[test]
        fn test_session_uses_settings() {
            let session = CliConfig::new()
                .with_display_width(4)
                .with_history_capacity(2)
                .session();
            assert_eq!(session.display_width(), 4);
            assert_eq!(session.history().max_entries(), 2);
        }
    }
}
