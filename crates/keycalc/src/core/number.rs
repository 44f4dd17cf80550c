//! Numeric values produced by the evaluator
//!
//! Integers stay exact until an operation forces a real result, so `3+4`
//! renders as `7` while `9**0.5` renders as `3.0`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Magnitude at or above which reals render in exponent form
const EXPONENT_UPPER: f64 = 1e16;
/// Magnitude below which (non-zero) reals render in exponent form
const EXPONENT_LOWER: f64 = 1e-4;

/// An evaluated number
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    /// Exact integer
    Integer(i64),
    /// Floating point value
    Real(f64),
}

impl Number {
    /// Returns the value as a float
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(x) => x,
        }
    }

    /// Returns true for exact integers
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns true if the value equals zero
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(x) => x == 0.0,
        }
    }

    /// Arithmetic negation; integers that cannot be negated become reals
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Integer(n) => n
                .checked_neg()
                .map_or_else(|| Self::Real(-(n as f64)), Self::Integer),
            Self::Real(x) => Self::Real(-x),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Self::Real(x)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(x) => f.write_str(&format_real(*x)),
        }
    }
}

/// Renders a float with shortest round-trip digits.
///
/// Reals always carry a fractional part or an exponent, and the exponent
/// form is `<mantissa>e<sign><at least two digits>`.
fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && (magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER) {
        let raw = format!("{value:e}");
        let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    let plain = format!("{value}");
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}
