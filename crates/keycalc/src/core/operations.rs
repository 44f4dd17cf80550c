//! Binary arithmetic on [`Number`]s
//!
//! Integer operands stay exact through `+ - *` and non-negative integer
//! powers; any overflow falls back to floating point. Division always
//! produces a real.

use crate::core::{CalcError, CalcResult, Number};
use serde::{Deserialize, Serialize};

/// Binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Exponentiation (**)
    Power,
}

impl Operation {
    /// Operators reachable from the keypad, in keypad column order
    pub const KEYED: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the machine-form symbol used in expressions
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "**",
        }
    }

    /// Returns the glyph shown on the display and keypad
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Maps a single machine-form character to a keyed operator
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// Checked arithmetic over [`Number`]
#[derive(Debug, Default, Clone, Copy)]
pub struct Arithmetic;

impl Arithmetic {
    /// Performs an operation on two operands
    pub fn calculate(a: Number, b: Number, op: Operation) -> CalcResult<Number> {
        let result = match op {
            Operation::Add => Self::add(a, b),
            Operation::Subtract => Self::subtract(a, b),
            Operation::Multiply => Self::multiply(a, b),
            Operation::Divide => Self::divide(a, b)?,
            Operation::Power => Self::power(a, b)?,
        };
        Self::check_finite(result)
    }

    /// Addition: a + b
    #[must_use]
    pub fn add(a: Number, b: Number) -> Number {
        Self::integer_or_real(a, b, i64::checked_add, |x, y| x + y)
    }

    /// Subtraction: a - b
    #[must_use]
    pub fn subtract(a: Number, b: Number) -> Number {
        Self::integer_or_real(a, b, i64::checked_sub, |x, y| x - y)
    }

    /// Multiplication: a * b
    #[must_use]
    pub fn multiply(a: Number, b: Number) -> Number {
        Self::integer_or_real(a, b, i64::checked_mul, |x, y| x * y)
    }

    /// Division: a / b, always real
    pub fn divide(a: Number, b: Number) -> CalcResult<Number> {
        if b.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        Ok(Number::Real(a.as_f64() / b.as_f64()))
    }

    /// Power: a ** b
    pub fn power(a: Number, b: Number) -> CalcResult<Number> {
        if a.is_zero() && b.as_f64() < 0.0 {
            return Err(CalcError::DivisionByZero);
        }

        if let (Number::Integer(base), Number::Integer(exponent)) = (a, b) {
            if let Ok(exponent) = u32::try_from(exponent) {
                if let Some(exact) = base.checked_pow(exponent) {
                    return Ok(Number::Integer(exact));
                }
            }
        }

        Ok(Number::Real(a.as_f64().powf(b.as_f64())))
    }

    fn integer_or_real(
        a: Number,
        b: Number,
        exact: fn(i64, i64) -> Option<i64>,
        real: fn(f64, f64) -> f64,
    ) -> Number {
        if let (Number::Integer(x), Number::Integer(y)) = (a, b) {
            if let Some(n) = exact(x, y) {
                return Number::Integer(n);
            }
        }
        Number::Real(real(a.as_f64(), b.as_f64()))
    }

    /// Rejects NaN (non-real) and infinite results
    fn check_finite(result: Number) -> CalcResult<Number> {
        match result {
            Number::Real(x) if x.is_nan() => {
                Err(CalcError::InvalidResult("not a real number".into()))
            }
            Number::Real(x) if x.is_infinite() => Err(CalcError::Overflow),
            other => Ok(other),
        }
    }
}
