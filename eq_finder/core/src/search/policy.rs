//! Hit policy

use super::config::SearchConfig;
use super::magnitude::Magnitude;

/// Fate of one examined candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Units do not cancel
    Rejected,

    /// The all-zero vector; relates nothing
    Trivial,

    /// Dimensionless but outside the tolerance window
    Miss,

    /// Dimensionless, magnitude beyond `f64` range, not reported
    Overflow,

    /// Dimensionless, magnitude below the smallest normal `f64`, not reported
    Underflow,

    /// Reportable equation
    Hit(Magnitude),
}

/// Decides whether a magnitude is close enough to unity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitPolicy {
    range: f64,
    lower: f64,
    any_range: bool,
}

impl HitPolicy {
    pub fn new(range: f64, any_range: bool) -> Self {
        Self {
            range,
            lower: 1.0 / range,
            any_range,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.range, config.any_range)
    }

    /// Strictly inside `(1/range, range)`, or anything under `any_range`
    #[inline]
    pub fn accepts(&self, magnitude: f64) -> bool {
        self.any_range || (magnitude > self.lower && magnitude < self.range)
    }

    /// Classify the magnitude of a dimensionless equation
    pub fn judge(&self, magnitude: Magnitude) -> Outcome {
        match magnitude {
            _ if self.any_range => Outcome::Hit(magnitude),
            Magnitude::Finite(v) if self.accepts(v) => Outcome::Hit(magnitude),
            Magnitude::Finite(_) => Outcome::Miss,
            Magnitude::Overflow => Outcome::Overflow,
            Magnitude::Underflow => Outcome::Underflow,
        }
    }
}
