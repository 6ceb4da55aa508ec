//! Base units and dimensional signatures
//!
//! The search only cares that each constant carries one integer power per
//! base unit. Changing the unit set means changing `NUM_UNITS` and
//! `UNIT_NAMES` together.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Number of base units in a dimensional signature
pub const NUM_UNITS: usize = 4;

/// Base unit names, in signature order
pub const UNIT_NAMES: [&str; NUM_UNITS] = ["Meters", "Kilograms", "Seconds", "Amperes"];

/// Short column headers used by the parameter table
pub const UNIT_ABBREVIATIONS: [&str; NUM_UNITS] = ["M", "Kg", "S", "A"];

/// Powers of each base unit for one constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitVector(pub [i32; NUM_UNITS]);

impl UnitVector {
    /// Dimensionless signature
    pub const fn dimensionless() -> Self {
        UnitVector([0; NUM_UNITS])
    }

    pub const fn new(powers: [i32; NUM_UNITS]) -> Self {
        UnitVector(powers)
    }

    /// Check if every power is zero
    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|&p| p == 0)
    }

    /// Power of base unit `unit`
    #[inline]
    pub fn power(&self, unit: usize) -> i32 {
        self.0[unit]
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for UnitVector {
    type Output = i32;

    fn index(&self, unit: usize) -> &i32 {
        &self.0[unit]
    }
}

impl From<[i32; NUM_UNITS]> for UnitVector {
    fn from(powers: [i32; NUM_UNITS]) -> Self {
        UnitVector(powers)
    }
}

impl fmt::Display for UnitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (power, name) in self.0.iter().zip(UNIT_ABBREVIATIONS) {
            if *power == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if *power == 1 {
                write!(f, "{}", name)?;
            } else {
                write!(f, "{}^{}", name, power)?;
            }
        }
        if first {
            write!(f, "1")?;
        }
        Ok(())
    }
}
