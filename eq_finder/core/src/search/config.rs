//! Search configuration

use crate::catalog::LoadedCatalog;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Which half of the sign-mirrored space is enumerated
///
/// Negating every exponent of a dimensionless equation gives another
/// dimensionless equation with the reciprocal magnitude. Both hit tests are
/// closed under that inversion, so enumerating one representative of each
/// mirror pair loses no hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MirrorPolicy {
    /// The first constant only takes exponents in `[0, MaxExponent]`
    #[default]
    Canonical,

    /// Every constant spans `[-MaxExponent, MaxExponent]`
    Full,
}

/// Search session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Largest exponent tried; the smallest is its negation
    pub max_exponent: i64,

    /// A hit needs magnitude in `(1/range, range)`
    pub range: f64,

    /// Report every dimensionless equation regardless of magnitude
    pub any_range: bool,

    /// Number of parallel search workers
    pub workers: usize,

    /// Mirror-duplicate handling
    pub mirror: MirrorPolicy,

    /// Candidates between progress log lines (0 disables progress logging)
    pub progress_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_exponent: 6,
            range: 100.0,
            any_range: false,
            workers: 16,
            mirror: MirrorPolicy::Canonical,
            progress_interval: 2_000_000,
        }
    }
}

impl SearchConfig {
    #[inline]
    pub fn min_exponent(&self) -> i64 {
        -self.max_exponent
    }

    /// Number of values one full-range position can take
    ///
    /// `None` when negative or when the shifted digits would not fit in an
    /// `i64`.
    pub fn exp_range(&self) -> Option<u64> {
        let range = self.max_exponent.checked_mul(2)?.checked_add(1)?;
        u64::try_from(range).ok()
    }

    /// Apply `MaxExponent` / `MagnitudeDeviation` directives from a catalog file
    pub fn apply_catalog_overrides(&mut self, loaded: &LoadedCatalog) {
        if let Some(max_exponent) = loaded.max_exponent {
            self.max_exponent = max_exponent;
        }
        if let Some(range) = loaded.magnitude_deviation {
            self.range = range;
        }
    }

    /// Reject parameters that would make the search meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_exponent < 0 {
            return Err(ConfigError::NegativeMaxExponent(self.max_exponent));
        }
        // NaN fails this comparison too
        if !(self.range > 1.0) {
            return Err(ConfigError::InvalidRange(self.range));
        }
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        Ok(())
    }
}
