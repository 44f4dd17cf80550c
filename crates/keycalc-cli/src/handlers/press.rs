//! Press command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Printer;
use crate::PressArgs;
use keycalc::core::history::HistoryEntry;
use keycalc::core::Session;
use keycalc::display::DisplayLines;
use serde::Serialize;
use tracing::info;

/// Final state after replaying a key sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressReport {
    /// Formatted committed expression
    pub total: String,
    /// Formatted pending operand
    pub current: String,
    /// Successful evaluations, oldest first
    pub history: Vec<HistoryEntry>,
}

impl PressReport {
    /// Captures a session's display and history
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let DisplayLines { total, current } = session.display();
        Self {
            total,
            current,
            history: session.history().iter().cloned().collect(),
        }
    }
}

/// Replays keys through a fresh session built from the configuration
#[must_use]
pub fn replay(config: &CliConfig, keys: &str) -> Session {
    let mut session = config.session();
    let outcomes = session.press_keys(keys);
    let failures = outcomes.iter().filter(|o| o.is_failure()).count();
    info!(keys, actions = outcomes.len(), failures, "replayed");
    session
}

/// Execute the press command
pub fn execute_press(config: &CliConfig, args: &PressArgs) -> CliResult<()> {
    let session = replay(config, &args.keys);
    let printer = Printer::new(config.color.should_color(), config.verbosity.is_quiet());

    if args.json {
        let report = PressReport::from_session(&session);
        printer.raw(&serde_json::to_string_pretty(&report)?);
    } else {
        printer.lines(&session.display());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_pending_entry() {
        let session = replay(&CliConfig::new(), "3+4");
        let lines = session.display();
        assert_eq!(lines.total, "3 + ");
        assert_eq!(lines.current, "4");
    }

    #[test]
    fn test_replay_evaluate_records_history() {
        let session = replay(&CliConfig::new(), "3+4=");
        let report = PressReport::from_session(&session);
        assert_eq!(report.total, "");
        assert_eq!(report.current, "7");
        assert_eq!(report.history.len(), 1);
        assert_eq!(report.history[0].expression, "3+4");
        assert_eq!(report.history[0].result, "7");
    }

    #[test]
    fn test_replay_error_marker() {
        let session = replay(&CliConfig::new(), "5/0=");
        assert!(session.display().is_error());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_replay_honours_width() {
        let config = CliConfig::new().with_display_width(3);
        let session = replay(&config, "123456");
        assert_eq!(session.display().current, "123");
    }

    #[test]
    fn test_report_json_shape() {
        let report = PressReport::from_session(&replay(&CliConfig::new(), "2s"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["current"], "4");
        assert!(json["history"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_execute_press_json() {
        let args = PressArgs {
            keys: "1+1=".to_string(),
            json: true,
        };
        assert!(execute_press(&CliConfig::new(), &args).is_ok());
    }
}
