//! Fixed-point fuel quantities.
//!
//! Fuel is stored as whole hundredths of a litre.  "Round up to two decimal
//! digits" then becomes an integer ceiling, and sums over long operation
//! lists are exact, so repeated searches produce bit-identical totals.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Guard against floating-point noise when converting products such as
/// `30.0 * 8.0` that are mathematically integral.
const ROUNDING_EPSILON: f64 = 1e-9;

/// A quantity of fuel in hundredths of a litre.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fuel(pub u64);

impl Fuel {
    pub const ZERO: Fuel = Fuel(0);

    /// Nearest fixed-point value to `litres` (negative clamps to zero).
    pub fn from_litres(litres: f64) -> Self {
        Fuel((litres * 100.0).round().max(0.0) as u64)
    }

    /// Ceiling of a quantity already expressed in hundredths of a litre.
    pub fn ceil_centilitres(centi: f64) -> Self {
        if centi <= 0.0 {
            return Fuel::ZERO;
        }
        Fuel((centi - ROUNDING_EPSILON).ceil().max(0.0) as u64)
    }

    #[inline]
    pub fn litres(self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub fn saturating_sub(self, rhs: Fuel) -> Fuel {
        Fuel(self.0.saturating_sub(rhs.0))
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Fuel {
    type Output = Fuel;
    #[inline]
    fn add(self, rhs: Fuel) -> Fuel {
        Fuel(self.0 + rhs.0)
    }
}

impl AddAssign for Fuel {
    #[inline]
    fn add_assign(&mut self, rhs: Fuel) {
        self.0 += rhs.0;
    }
}

impl Sum for Fuel {
    fn sum<I: Iterator<Item = Fuel>>(iter: I) -> Fuel {
        iter.fold(Fuel::ZERO, Add::add)
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02} L", self.0 / 100, self.0 % 100)
    }
}
