//! Eval command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Printer;
use crate::EvalArgs;
use keycalc::core::evaluator::Evaluator;
use keycalc::core::{CalcResult, Number, ERROR_MARKER};
use tracing::{info, warn};

/// Evaluates a single expression
pub fn evaluate_expression(expression: &str) -> CalcResult<Number> {
    Evaluator::new().evaluate_str(expression)
}

/// Execute the eval command
///
/// Prints the value, or the error marker followed by a non-zero exit.
pub fn execute_eval(config: &CliConfig, args: &EvalArgs) -> CliResult<()> {
    let printer = Printer::new(config.color.should_color(), config.verbosity.is_quiet());

    match evaluate_expression(&args.expression) {
        Ok(value) => {
            info!(expression = %args.expression, %value, "evaluated");
            printer.result(&value.to_string());
            Ok(())
        }
        Err(e) => {
            warn!(expression = %args.expression, error = %e, "evaluation failed");
            printer.error_marker(ERROR_MARKER);
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::CliError;
    use keycalc::core::CalcError;

    #[test]
    fn test_evaluate_integer() {
        assert_eq!(evaluate_expression("3+4*2").unwrap(), Number::Integer(11));
    }

    #[test]
    fn test_evaluate_power_precedence() {
        assert_eq!(evaluate_expression("-2**2").unwrap(), Number::Integer(-4));
        assert_eq!(evaluate_expression("2**-1").unwrap(), Number::Real(0.5));
    }

    #[test]
    fn test_evaluate_division_is_real() {
        assert_eq!(evaluate_expression("6/3").unwrap().to_string(), "2.0");
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        assert_eq!(evaluate_expression("5/0"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_execute_eval_error() {
        let args = EvalArgs {
            expression: "1+".to_string(),
        };
        let err = execute_eval(&CliConfig::new(), &args).unwrap_err();
        assert!(matches!(err, CliError::Evaluation(_)));
    }

    #[test]
    fn test_execute_eval_ok() {
        let args = EvalArgs {
            expression: "9".to_string(),
        };
        assert!(execute_eval(&CliConfig::new(), &args).is_ok());
    }
}
