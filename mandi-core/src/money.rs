use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A rupee amount held as a whole number of paise.
///
/// All arithmetic is integer arithmetic; floating point only appears at the
/// edges, when parsing caller-supplied decimals or reporting rupee values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Convert a rupee decimal to paise, rounding half-up at two decimals.
    ///
    /// Callers reject non-finite input before conversion; validation with
    /// field context lives in the aggregators.
    pub fn from_rupees(rupees: f64) -> Self {
        Money((rupees * 100.0).round() as i64)
    }

    pub const fn paise(self) -> i64 {
        self.0
    }

    /// Rupee value, for display and reporting.
    pub fn rupees(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Apply a percentage, rounding half-up to the nearest paisa.
    pub fn percent_of(self, rate: TaxRate) -> Money {
        let numerator = self.0 as i128 * rate.basis_points() as i128;
        Money(((numerator + 5_000) / 10_000) as i64)
    }

    /// Divide evenly across `n` parts, rounding half-up. Zero parts yields zero.
    pub fn divided_by(self, n: u32) -> Money {
        if n == 0 {
            return Money::ZERO;
        }
        Money(((self.0 as i128 + n as i128 / 2) / n as i128) as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
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
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

/// A GST percentage held in basis points (hundredths of a percent).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    pub const ZERO: TaxRate = TaxRate(0);

    /// Convert a percentage (e.g. 2.5 for 2.5%) to basis points.
    ///
    /// Expects a validated value in 0..=100.
    pub fn from_percent(percent: f64) -> Self {
        TaxRate((percent * 100.0).round() as u32)
    }

    pub const fn from_basis_points(bp: u32) -> Self {
        TaxRate(bp)
    }

    pub const fn basis_points(self) -> u32 {
        self.0
    }

    pub fn percent(self) -> f64 {
        self.0 as f64 / 100.0
    }
}
