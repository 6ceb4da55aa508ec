//! Magnitude evaluation
//!
//! Products of constants are summed as logarithms so that large exponents
//! over magnitudes spanning many decades never overflow halfway through.
//! Only the final exponentiation can leave the `f64` range, and that is
//! checked here for the one equation being evaluated, in both directions.

use crate::catalog::Constant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `ln(f64::MAX)`; a log sum above this cannot be exponentiated
pub const LN_F64_MAX: f64 = 709.782_712_893_384;

/// `ln(f64::MIN_POSITIVE)`; below this only subnormals or zero remain
pub const LN_F64_MIN_POSITIVE: f64 = -708.396_418_532_264_1;

/// Numeric value of one equation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Magnitude {
    Finite(f64),

    /// True magnitude exceeds the `f64` range
    Overflow,

    /// True magnitude is below the smallest normal `f64`
    Underflow,
}

impl Magnitude {
    pub fn value(&self) -> Option<f64> {
        match self {
            Magnitude::Finite(v) => Some(*v),
            Magnitude::Overflow | Magnitude::Underflow => None,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Magnitude::Overflow)
    }

    pub fn is_underflow(&self) -> bool {
        matches!(self, Magnitude::Underflow)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Overflow => write!(f, "(OVER_FLOW)"),
            Magnitude::Underflow => write!(f, "(UNDER_FLOW)"),
            Magnitude::Finite(v) => {
                let abs = v.abs();
                if abs != 0.0 && !(1e-4..1e6).contains(&abs) {
                    write!(f, "{:.6e}", v)
                } else {
                    write!(f, "{:.6}", v)
                }
            }
        }
    }
}

/// `Σ exponent_i * ln(magnitude_i)`, skipping zero exponents
pub fn log_magnitude(constants: &[Constant], exponents: &[i64]) -> f64 {
    constants
        .iter()
        .zip(exponents)
        .filter(|(_, &e)| e != 0)
        .map(|(c, &e)| c.magnitude.ln() * e as f64)
        .sum()
}

/// Evaluate `Π magnitude_i ^ exponent_i`
pub fn evaluate(constants: &[Constant], exponents: &[i64]) -> Magnitude {
    let log = log_magnitude(constants, exponents);
    if log > LN_F64_MAX {
        return Magnitude::Overflow;
    }
    if log < LN_F64_MIN_POSITIVE {
        return Magnitude::Underflow;
    }

    let value = log.exp();
    if value.is_finite() {
        Magnitude::Finite(value)
    } else {
        Magnitude::Overflow
    }
}
