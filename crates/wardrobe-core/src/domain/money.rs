//! Money in integer minor currency units.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// An amount of money in minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Largest catalog total accepted at the boundary. Scores add penalties
    /// on top of budget overflow, so totals stay well inside `i64`.
    pub const MAX_CATALOG_TOTAL: Money = Money(i64::MAX / 4);

    /// Creates an amount from minor units, e.g. `Money::from_minor(1234)` is $12.34.
    #[inline]
    pub const fn from_minor(minor_units: i64) -> Self {
        Money(minor_units)
    }

    /// Creates an amount from whole major units.
    #[inline]
    pub const fn from_major(major_units: i64) -> Self {
        Money(major_units * 100)
    }

    #[inline]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns `None` on `i64` overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}
