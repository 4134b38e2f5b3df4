//! Monetary amounts in the smallest currency unit.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// An amount of money in cents.
///
/// Signed, because profit can be negative. Arithmetic saturates instead of
/// wrapping.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Convert a user-entered dollar amount, rounding to the nearest cent.
    pub fn from_dollars(dollars: f64) -> DomainResult<Self> {
        if !dollars.is_finite() {
            return Err(DomainError::validation("amount must be a finite number"));
        }
        let cents = (dollars * 100.0).round();
        if cents >= i64::MAX as f64 || cents <= i64::MIN as f64 {
            return Err(DomainError::validation("amount is out of range"));
        }
        Ok(Self(cents as i64))
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn to_dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Divide into `parts` equal shares, rounding half away from zero.
    ///
    /// Zero parts yields zero.
    pub fn split_even(self, parts: usize) -> Money {
        if parts == 0 {
            return Money::ZERO;
        }
        let parts = i64::try_from(parts).unwrap_or(i64::MAX);
        let quotient = self.0 / parts;
        let remainder = self.0 % parts;
        if remainder.unsigned_abs().saturating_mul(2) >= parts.unsigned_abs() {
            Money(quotient + self.0.signum())
        } else {
            Money(quotient)
        }
    }

    /// `self / denominator * 100`, or 0 when the denominator is zero.
    pub fn percent_of(self, denominator: Money) -> f64 {
        if denominator.is_zero() {
            return 0.0;
        }
        self.0 as f64 / denominator.0 as f64 * 100.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}
