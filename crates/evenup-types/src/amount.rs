//! Money normalization.
//!
//! Every monetary value in the engine is an [`Amount`]: a decimal rounded to
//! two fractional digits (half away from zero). There is no way to build an
//! `Amount` that skips the rounding step, so comparisons between amounts are
//! always between canonical cent values.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::{CENT, MONEY_SCALE};
use crate::{EvenupError, Result};

/// Canonicalize a raw decimal to an [`Amount`]: `round(value * 100) / 100`.
#[must_use]
pub fn normalize(value: Decimal) -> Amount {
    Amount::normalize(value)
}

/// A fixed-point monetary value with exactly two fractional digits.
///
/// Signed: net balances are negative for net debtors. Debt edges only ever
/// hold positive amounts, which [`crate::DebtGraph`] enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One minor unit (0.01).
    pub const CENT: Self = Self(CENT);

    /// Round `value` to two fractional digits, midpoint away from zero.
    #[must_use]
    pub fn normalize(value: Decimal) -> Self {
        Self(value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Build an amount from a whole number of minor units.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, MONEY_SCALE))
    }

    /// Convert a host float. Fails with `InvalidAmount` for NaN or infinities.
    pub fn try_from_f64(value: f64) -> Result<Self> {
        Decimal::from_f64(value)
            .map(Self::normalize)
            .ok_or_else(|| EvenupError::InvalidAmount {
                reason: format!("{value} is not a finite number"),
            })
    }

    /// The underlying (already rounded) decimal.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Magnitude of this amount.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Whether the magnitude is strictly below `threshold`.
    #[must_use]
    pub fn is_dust(&self, threshold: Decimal) -> bool {
        self.0.abs() < threshold
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::normalize(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::normalize(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::normalize(self.0 - rhs.0)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn normalize_rounds_to_cents() {
        assert_eq!(normalize(dec("10.004")), Amount::from_cents(1000));
        assert_eq!(normalize(dec("10.006")), Amount::from_cents(1001));
        assert_eq!(normalize(dec("33.3333333")), Amount::from_cents(3333));
    }

    #[test]
    fn normalize_midpoint_away_from_zero() {
        assert_eq!(normalize(dec("0.005")), Amount::from_cents(1));
        assert_eq!(normalize(dec("2.675")), Amount::from_cents(268));
        assert_eq!(normalize(dec("-0.005")), Amount::from_cents(-1));
    }

    #[test]
    fn scale_does_not_affect_equality() {
        assert_eq!(normalize(dec("10")), normalize(dec("10.00")));
        assert_eq!(normalize(dec("10")).to_string(), "10.00");
    }

    #[test]
    fn float_drift_is_suppressed() {
        let a = Amount::try_from_f64(0.1).unwrap();
        let b = Amount::try_from_f64(0.2).unwrap();
        assert_eq!(a + b, Amount::from_cents(30));
        assert_eq!(
            Amount::try_from_f64(10.000_000_1).unwrap(),
            Amount::from_cents(1000)
        );
    }

    #[test]
    fn non_finite_float_rejected() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Amount::try_from_f64(v).unwrap_err();
            assert!(matches!(err, EvenupError::InvalidAmount { .. }));
        }
    }

    #[test]
    fn arithmetic_stays_normalized() {
        let mut x = Amount::from_cents(1001);
        x -= Amount::from_cents(1000);
        assert_eq!(x, Amount::CENT);
        x += Amount::CENT;
        assert_eq!(x, Amount::from_cents(2));
        assert_eq!(-x, Amount::from_cents(-2));
        assert_eq!((-x).abs(), x);
        let total: Amount = [Amount::CENT, Amount::CENT, Amount::CENT].iter().sum();
        assert_eq!(total, Amount::from_cents(3));
    }

    #[test]
    fn sign_predicates() {
        assert!(Amount::CENT.is_positive());
        assert!((-Amount::CENT).is_negative());
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::ZERO.is_positive());
    }

    #[test]
    fn dust_detection() {
        let dust = dec("0.009");
        assert!(Amount::ZERO.is_dust(dust));
        assert!(!Amount::CENT.is_dust(dust));
        assert!(!(-Amount::CENT).is_dust(dust));
    }

    #[test]
    fn serde_renormalizes_on_read() {
        let json = serde_json::to_string(&Amount::from_cents(3333)).unwrap();
        assert_eq!(json, "\"33.33\"");
        let back: Amount = serde_json::from_str("\"33.3349\"").unwrap();
        assert_eq!(back, Amount::from_cents(3333));
    }
}
