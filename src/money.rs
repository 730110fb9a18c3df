//! Exact currency amounts stored as integer minor units.
//!
//! All arithmetic stays in `i64` cents, so there is no rounding anywhere.
//! Text in major units ("12.34") is accepted only through explicit parsing,
//! and only when it maps to a whole number of minor units.

use crate::error::{AccountError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// An immutable amount of money counted in minor units (cents).
///
/// Equality and ordering are by minor units. Every `Money` in a program is
/// assumed to share one currency.
///
/// # Examples
///
/// ```
/// use bank_account::Money;
///
/// let amount = Money::new(-5);
/// assert_eq!(amount.to_string(), "-0.05");
///
/// let parsed: Money = "12.3".parse().unwrap();
/// assert_eq!(parsed.minor_units(), 1230);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Number of fractional digits in the major-unit representation.
    pub const SCALE: u32 = 2;

    /// Minor units per major unit.
    pub const MINOR_PER_MAJOR: i64 = 100;

    /// Zero value.
    pub const ZERO: Self = Money(0);

    /// Creates a `Money` from a count of minor units.
    pub const fn new(minor_units: i64) -> Self {
        Money(minor_units)
    }

    /// The additive identity.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns `true` if this amount is strictly greater than zero.
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if this amount is strictly below zero.
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Addition that returns `None` instead of overflowing `i64`.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Subtraction that returns `None` instead of overflowing `i64`.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// The exact value in major units.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, Self::SCALE)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = AccountError;

    /// Converts a major-unit decimal, rejecting anything finer than one minor unit.
    fn try_from(value: Decimal) -> Result<Self> {
        let scaled = value
            .checked_mul(Decimal::from(Self::MINOR_PER_MAJOR))
            .ok_or_else(|| AccountError::invalid_money(value, "amount out of range"))?;

        if !scaled.fract().is_zero() {
            return Err(AccountError::invalid_money(
                value,
                "Money must be an Integer number of minor units",
            ));
        }

        scaled
            .to_i64()
            .map(Money)
            .ok_or_else(|| AccountError::invalid_money(value, "amount out of range"))
    }
}

impl FromStr for Money {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)
            .map_err(|e| AccountError::invalid_money(trimmed, e.to_string()))?;
        Money::try_from(decimal)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let per_major = Self::MINOR_PER_MAJOR.unsigned_abs();
        write!(
            f,
            "{}{}.{:02}",
            sign,
            magnitude / per_major,
            magnitude % per_major
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_str(&s).map_err(serde::de::Error::custom)
    }
}
