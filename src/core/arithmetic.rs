//! The four arithmetic operations.
//!
//! All functions are pure and operate on `f64` with native IEEE-754
//! semantics: overflow yields infinity and NaN propagates.

use serde::Serialize;

use crate::error::{CalcError, Result};

/// A supported arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    /// Subcommand name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }

    /// Infix symbol used when rendering.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Apply the operation to two operands.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivideByZero`] for `Div` with a zero divisor.
    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        match self {
            Self::Add => Ok(add(a, b)),
            Self::Sub => Ok(sub(a, b)),
            Self::Mul => Ok(mul(a, b)),
            Self::Div => div(a, b),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[must_use]
pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

#[must_use]
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// # Errors
///
/// Returns [`CalcError::DivideByZero`] when `b` is zero (positive or negative).
pub fn div(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::DivideByZero);
    }
    Ok(a / b)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const SAMPLES: &[f64] = &[0.0, -0.0, 1.0, -1.0, 2.5, -4.0, 0.1, 1e300, -1e-300, 7.0];

    #[test]
    fn add_sub_mul_match_native_arithmetic() {
        for &a in SAMPLES {
            for &b in SAMPLES {
                assert_eq!(add(a, b), a + b);
                assert_eq!(sub(a, b), a - b);
                assert_eq!(mul(a, b), a * b);
            }
        }
    }

    #[test]
    fn div_matches_native_for_nonzero_divisor() {
        for &a in SAMPLES {
            for &b in SAMPLES.iter().filter(|b| **b != 0.0) {
                assert_eq!(div(a, b).unwrap(), a / b);
            }
        }
    }

    #[test]
    fn div_by_zero_always_fails() {
        for &a in SAMPLES {
            assert!(matches!(div(a, 0.0), Err(CalcError::DivideByZero)));
            assert!(matches!(div(a, -0.0), Err(CalcError::DivideByZero)));
        }
        assert!(matches!(div(f64::NAN, 0.0), Err(CalcError::DivideByZero)));
    }

    #[test]
    fn overflow_goes_to_infinity() {
        assert_eq!(mul(1e308, 10.0), f64::INFINITY);
        assert!(add(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn apply_dispatches() {
        assert_eq!(Operation::Add.apply(2.0, 3.0).unwrap(), 5.0);
        assert_eq!(Operation::Sub.apply(2.0, 3.0).unwrap(), -1.0);
        assert_eq!(Operation::Mul.apply(-4.0, 5.0).unwrap(), -20.0);
        assert_eq!(Operation::Div.apply(7.0, 2.0).unwrap(), 3.5);
        assert!(Operation::Div.apply(10.0, 0.0).is_err());
    }

    #[test]
    fn symbols_and_names() {
        let ops = [Operation::Add, Operation::Sub, Operation::Mul, Operation::Div];
        let symbols = ops.map(Operation::symbol);
        assert_eq!(symbols, ["+", "-", "*", "/"]);
        assert_eq!(Operation::Div.to_string(), "div");
        assert_eq!(serde_json::to_string(&Operation::Mul).unwrap(), "\"mul\"");
    }
}
