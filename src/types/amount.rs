//! Fixed-point signed money amounts.
//!
//! ## Overview
//!
//! Balances and transfers never touch floating point. An [`Amount`] is an
//! `i64` scaled by 10^8, so repeated add/subtract during netting is exact and
//! the result is identical on every platform.
//!
//! ## Scale Factor
//!
//! We use a scale factor of 10^8 (100,000,000), providing 8 decimal places.
//! Inputs with more precision are rejected rather than rounded.
//!
//! ## Examples
//!
//! ```
//! use group_settle::types::Amount;
//!
//! let owed: Amount = "12.50".parse().unwrap();
//! assert_eq!(owed.raw(), 1_250_000_000);
//! assert_eq!(owed.to_string(), "12.5");
//!
//! let debt: Amount = "-0.01".parse().unwrap();
//! assert!(debt.is_negative());
//! ```

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Scaling factor for fixed-point arithmetic: 10^8
pub const SCALE: i64 = 100_000_000;

/// Number of decimal places carried by [`SCALE`]
pub const DECIMALS: u32 = 8;

/// Largest whole-unit magnitude that can be represented
///
/// i64::MAX / SCALE ≈ 92,233,720,368 (92 billion)
pub const MAX_WHOLE_UNITS: i64 = i64::MAX / SCALE;

/// Errors raised when a decimal value cannot become an [`Amount`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("too many decimal places (max {DECIMALS}, got {0})")]
    TooManyDecimals(u32),

    #[error("amount out of range: {0}")]
    OutOfRange(Decimal),

    #[error("invalid amount format: {0}")]
    Parse(String),
}

/// A signed monetary value in fixed-point (scaled by 10^8).
///
/// Positive amounts are credit, negative amounts are debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(i64);

impl Amount {
    /// Zero
    pub const ZERO: Amount = Amount(0);

    /// One fixed-point unit (10^-8)
    pub const UNIT: Amount = Amount(1);

    /// Wrap a raw fixed-point value
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw fixed-point value
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Convert a whole number of currency units
    ///
    /// Returns `None` if the scaled value overflows.
    pub fn from_units(units: i64) -> Option<Self> {
        units.checked_mul(SCALE).map(Self)
    }

    /// Convert a [`Decimal`] without rounding
    ///
    /// # Errors
    ///
    /// * `AmountError::TooManyDecimals` - more than 8 significant decimal places
    /// * `AmountError::OutOfRange` - does not fit in `i64` once scaled
    ///
    /// # Example
    ///
    /// ```
    /// use group_settle::types::Amount;
    /// use rust_decimal::Decimal;
    ///
    /// let amount = Amount::from_decimal(Decimal::new(-30000, 2)).unwrap();
    /// assert_eq!(amount, Amount::from_units(-300).unwrap());
    /// ```
    pub fn from_decimal(d: Decimal) -> Result<Self, AmountError> {
        let normalized = d.normalize();
        if normalized.scale() > DECIMALS {
            return Err(AmountError::TooManyDecimals(normalized.scale()));
        }

        let scaled = normalized
            .checked_mul(Decimal::from(SCALE))
            .ok_or(AmountError::OutOfRange(d))?;
        match scaled.to_i64() {
            // i64::MIN is excluded so that abs/neg never overflow
            Some(raw) if raw != i64::MIN => Ok(Self(raw)),
            _ => Err(AmountError::OutOfRange(d)),
        }
    }

    /// Convert back to a [`Decimal`] (exact)
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, DECIMALS)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value (saturating at `i64::MAX`)
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Add two amounts, `None` on overflow
    #[inline]
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract two amounts, `None` on overflow
    #[inline]
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Self)
    }

    #[inline]
    pub fn saturating_add(self, other: Amount) -> Amount {
        Self(self.0.saturating_add(other.0))
    }

    #[inline]
    pub fn saturating_sub(self, other: Amount) -> Amount {
        Self(self.0.saturating_sub(other.0))
    }

    /// Sum an iterator of amounts, `None` on overflow
    pub fn checked_sum<I>(amounts: I) -> Option<Amount>
    where
        I: IntoIterator<Item = Amount>,
    {
        amounts
            .into_iter()
            .try_fold(Amount::ZERO, |acc, amount| acc.checked_add(amount))
    }

    /// `true` if |self - other| <= tolerance
    pub fn approx_eq(self, other: Amount, tolerance: Amount) -> bool {
        (self.0 as i128 - other.0 as i128).abs() <= tolerance.0 as i128
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Self(self.0.saturating_neg())
    }
}

impl fmt::Display for Amount {
    /// Human-readable form with trailing zeros trimmed
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal().normalize())
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim()).map_err(|e| AmountError::Parse(e.to_string()))?;
        Amount::from_decimal(decimal)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::from_decimal(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.to_decimal()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_scale_constant() {
        assert_eq!(SCALE, 100_000_000);
        assert_eq!(Decimal::new(SCALE, DECIMALS), dec!(1));
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!("1".parse::<Amount>().unwrap().raw(), 100_000_000);
        assert_eq!("0.5".parse::<Amount>().unwrap().raw(), 50_000_000);
        assert_eq!("-300".parse::<Amount>().unwrap().raw(), -30_000_000_000);
        assert_eq!("0.00000001".parse::<Amount>().unwrap(), Amount::UNIT);
        assert_eq!(" 0.005 ".parse::<Amount>().unwrap().raw(), 500_000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("abc".parse::<Amount>(), Err(AmountError::Parse(_))));
        assert!(matches!("".parse::<Amount>(), Err(AmountError::Parse(_))));
    }

    #[test]
    fn test_too_many_decimals() {
        assert_eq!(
            "0.000000001".parse::<Amount>(),
            Err(AmountError::TooManyDecimals(9))
        );
        // Trailing zeros beyond 8 places are not extra precision
        assert_eq!(
            Amount::from_decimal(dec!(1.0000000000)).unwrap(),
            Amount::from_units(1).unwrap()
        );
    }

    #[test]
    fn test_out_of_range() {
        let too_big = Decimal::from(MAX_WHOLE_UNITS) + dec!(1);
        assert!(matches!(
            Amount::from_decimal(too_big),
            Err(AmountError::OutOfRange(_))
        ));
        assert!(Amount::from_decimal(Decimal::from(MAX_WHOLE_UNITS)).is_ok());
    }

    #[test]
    fn test_decimal_conversion_is_exact() {
        let amount = Amount::from_decimal(dec!(-1234.56789012)).unwrap();
        assert_eq!(amount.to_decimal(), dec!(-1234.56789012));
        assert_eq!(Decimal::from(amount), dec!(-1234.56789012));
    }

    #[test]
    fn test_display_trims_zeros() {
        assert_eq!(Amount::from_units(300).unwrap().to_string(), "300");
        assert_eq!(Amount::from_raw(150_000_000).to_string(), "1.5");
        assert_eq!(Amount::from_raw(-500_000).to_string(), "-0.005");
        assert_eq!(Amount::ZERO.to_string(), "0");
    }

    #[test]
    fn test_sign_helpers() {
        let credit = Amount::from_units(5).unwrap();
        let debt = -credit;
        assert!(credit.is_positive());
        assert!(debt.is_negative());
        assert_eq!(debt.abs(), credit);
        assert!(Amount::ZERO.is_zero());
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Amount::from_raw(i64::MAX);
        assert_eq!(a.checked_add(Amount::UNIT), None);
        assert_eq!(Amount::from_raw(-i64::MAX).checked_sub(Amount::from_raw(2)), None);
        assert_eq!(
            Amount::from_units(100)
                .unwrap()
                .checked_sub(Amount::from_units(40).unwrap()),
            Amount::from_units(60)
        );
    }

    #[test]
    fn test_checked_sum() {
        let values = [100, -30, -70].map(|u| Amount::from_units(u).unwrap());
        assert_eq!(Amount::checked_sum(values), Some(Amount::ZERO));
        assert_eq!(
            Amount::checked_sum([Amount::from_raw(i64::MAX), Amount::UNIT]),
            None
        );
    }

    #[test]
    fn test_approx_eq() {
        let tolerance = Amount::from_raw(1);
        assert!(Amount::from_raw(100).approx_eq(Amount::from_raw(101), tolerance));
        assert!(Amount::from_raw(101).approx_eq(Amount::from_raw(100), tolerance));
        assert!(!Amount::from_raw(100).approx_eq(Amount::from_raw(102), tolerance));
    }

    #[test]
    fn test_serde_uses_decimal_strings() {
        let amount: Amount = serde_json::from_str("\"-12.5\"").unwrap();
        assert_eq!(amount, "-12.5".parse().unwrap());

        let from_number: Amount = serde_json::from_str("42").unwrap();
        assert_eq!(from_number, Amount::from_units(42).unwrap());

        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"-12.50000000\"");
    }
}
