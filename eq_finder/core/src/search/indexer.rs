//! Equation indexing
//!
//! Every candidate equation is an exponent vector with one entry per
//! constant. The vectors of a search space are numbered by mixed-radix
//! counting: position 0 is the least significant digit, each digit is
//! shifted to be non-negative before carrying and shifted back afterward.
//!
//! Under `MirrorPolicy::Canonical` position 0 only spans `[0, MaxExponent]`,
//! which roughly halves the space: of every sign-mirrored pair `(v, -v)` at
//! least one is enumerated.

use super::config::{MirrorPolicy, SearchConfig};
use super::partition::Partition;
use crate::error::ConfigError;

/// Trial exponents, one per constant
pub type ExponentVector = Vec<i64>;

/// Shape of the enumerated space for a given constant count and bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquationSpace {
    constants: usize,
    min_exponent: i64,
    max_exponent: i64,
    /// Lowest exponent of position 0
    first_floor: i64,
    /// Number of values position 0 takes
    first_radix: u64,
    radix: u64,
    num_equations: u64,
}

impl EquationSpace {
    /// Size the space for `constants` constants under `config`
    ///
    /// Fails when the equation count does not fit in a `u64`.
    pub fn new(constants: usize, config: &SearchConfig) -> Result<Self, ConfigError> {
        if config.max_exponent < 0 {
            return Err(ConfigError::NegativeMaxExponent(config.max_exponent));
        }
        let too_large = || ConfigError::SpaceTooLarge {
            constants,
            max_exponent: config.max_exponent,
        };

        let radix = config.exp_range().ok_or_else(too_large)?;
        let (first_floor, first_radix) = match config.mirror {
            MirrorPolicy::Canonical => (0, config.max_exponent as u64 + 1),
            MirrorPolicy::Full => (config.min_exponent(), radix),
        };

        let num_equations = if constants == 0 {
            0
        } else {
            let lower = u32::try_from(constants - 1).map_err(|_| too_large())?;
            radix
                .checked_pow(lower)
                .and_then(|n| n.checked_mul(first_radix))
                .ok_or_else(too_large)?
        };

        Ok(Self {
            constants,
            min_exponent: config.min_exponent(),
            max_exponent: config.max_exponent,
            first_floor,
            first_radix,
            radix,
            num_equations,
        })
    }

    /// Total number of exponent vectors in the space
    pub fn num_equations(&self) -> u64 {
        self.num_equations
    }

    /// Lowest exponent position `pos` can take
    #[inline]
    fn floor(&self, pos: usize) -> i64 {
        if pos == 0 {
            self.first_floor
        } else {
            self.min_exponent
        }
    }

    /// Number of values position `pos` can take
    #[inline]
    fn radix_at(&self, pos: usize) -> u64 {
        if pos == 0 {
            self.first_radix
        } else {
            self.radix
        }
    }

    /// Exponent vector for `index`, or `None` outside the space
    pub fn vector_at(&self, index: u64) -> Option<ExponentVector> {
        if index >= self.num_equations {
            return None;
        }
        let mut indexer = self.indexer(Partition::new(0, index, self.num_equations));
        indexer.reset_from(index);
        Some(indexer.exponents)
    }

    /// Index of an exponent vector, or `None` if it lies outside the space
    pub fn index_of(&self, exponents: &[i64]) -> Option<u64> {
        if exponents.len() != self.constants || self.constants == 0 {
            return None;
        }

        let mut index: u64 = 0;
        for (pos, &e) in exponents.iter().enumerate().rev() {
            if e < self.floor(pos) || e > self.max_exponent {
                return None;
            }
            let digit = (e - self.floor(pos)) as u64;
            index = index.checked_mul(self.radix_at(pos))?.checked_add(digit)?;
        }
        Some(index)
    }

    /// Cursor over one partition, not yet positioned
    pub fn indexer(&self, partition: Partition) -> EquationIndexer {
        EquationIndexer {
            space: *self,
            exponents: vec![self.min_exponent; self.constants],
            index: partition.start,
            stop: partition.stop,
        }
    }
}

/// Cursor walking a contiguous index range of an `EquationSpace`
#[derive(Debug, Clone)]
pub struct EquationIndexer {
    space: EquationSpace,
    exponents: ExponentVector,
    index: u64,
    stop: u64,
}

impl EquationIndexer {
    /// Position the cursor on `index`
    ///
    /// Position 0 is seeded with the whole index and every other position
    /// with its lowest value; carries then ripple upward until each position
    /// is in bounds.
    pub fn reset_from(&mut self, index: u64) {
        debug_assert!(index < self.space.num_equations);
        let last = self.exponents.len() - 1;

        let mut carry = index;
        for pos in 0..last {
            // Position starts at its floor, so its shifted value is just the carry
            let radix = self.space.radix_at(pos);
            self.exponents[pos] = (carry % radix) as i64 + self.space.floor(pos);
            carry /= radix;
        }
        self.exponents[last] = self.space.floor(last) + carry as i64;
        self.index = index;
    }

    /// Step to the next equation
    ///
    /// Returns false once the partition stop is reached; the vector then
    /// stays on the last equation visited.
    pub fn advance(&mut self) -> bool {
        if self.index + 1 >= self.stop {
            self.index = self.stop;
            return false;
        }
        self.index += 1;

        for pos in 0..self.exponents.len() {
            if self.exponents[pos] < self.space.max_exponent {
                self.exponents[pos] += 1;
                return true;
            }
            self.exponents[pos] = self.space.floor(pos);
        }

        // Carried out of the most significant position
        false
    }

    /// Current equation index
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Current exponent vector
    pub fn exponents(&self) -> &[i64] {
        &self.exponents
    }

    pub fn space(&self) -> &EquationSpace {
        &self.space
    }
}
