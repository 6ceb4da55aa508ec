//! Dimensional validity
//!
//! An equation is only worth evaluating if every base unit cancels.

use crate::catalog::Constant;
use crate::units::NUM_UNITS;

/// Net power of base unit `unit` across the equation
///
/// Summed in `i128` so that no exponent the indexer can produce overflows.
#[inline]
pub fn unit_power(constants: &[Constant], exponents: &[i64], unit: usize) -> i128 {
    constants
        .iter()
        .zip(exponents)
        .filter(|(_, &e)| e != 0)
        .map(|(c, &e)| i128::from(c.units[unit]) * i128::from(e))
        .sum()
}

/// True if all base units cancel
///
/// Stops at the first unit with a non-zero net power.
pub fn is_dimensionless(constants: &[Constant], exponents: &[i64]) -> bool {
    debug_assert_eq!(constants.len(), exponents.len());
    (0..NUM_UNITS).all(|unit| unit_power(constants, exponents, unit) == 0)
}

/// Net power of every base unit
pub fn net_units(constants: &[Constant], exponents: &[i64]) -> [i128; NUM_UNITS] {
    std::array::from_fn(|unit| unit_power(constants, exponents, unit))
}
