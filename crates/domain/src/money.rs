//! Money and tax arithmetic.

use serde::{Deserialize, Serialize};

/// A currency amount in whole rupees.
///
/// Menu prices in this domain are whole-rupee amounts and the bill is
/// rounded to the whole rupee, so ₹1 is the smallest currency unit.
/// Integer representation avoids floating point drift in totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a new amount from whole rupees.
    pub fn from_rupees(rupees: i64) -> Self {
        Self(rupees)
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the amount in whole rupees.
    pub fn rupees(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money(self.0 * i64::from(quantity))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            write!(f, "-₹{}", -self.0)
        } else {
            write!(f, "₹{}", self.0)
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// A tax rate in basis points (1 bp = 0.01%).
///
/// Basis points keep the rate exact in integer arithmetic; 5% GST is
/// 500 basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    /// The standard 5% GST applied to café bills.
    pub const STANDARD_GST: TaxRate = TaxRate(500);

    /// Creates a tax rate from basis points.
    pub fn from_basis_points(bps: u32) -> Self {
        Self(bps)
    }

    /// Returns the rate in basis points.
    pub fn basis_points(&self) -> u32 {
        self.0
    }

    /// Applies the rate to a non-negative amount, rounding half-up to the
    /// smallest currency unit.
    pub fn apply(&self, amount: Money) -> Money {
        let scaled = amount.rupees() * i64::from(self.0);
        Money::from_rupees((scaled + 5_000) / 10_000)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::STANDARD_GST
    }
}

impl std::fmt::Display for TaxRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}
