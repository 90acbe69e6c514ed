//! Money types for integer minor-unit amounts
//!
//! This module provides a type-safe representation of monetary values.
//! Amounts are stored as integer minor units (cents); intermediate rate and
//! multiplier calculations use rust_decimal and are rounded back to minor
//! units with half-to-even (banker's) rounding.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount in integer minor units
///
/// The system is single-currency; amounts are plain integers on the wire,
/// so Money serializes transparently as its minor-unit value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from an amount in minor units (e.g., cents)
    pub fn from_minor(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the amount in minor units
    pub fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the amount as a Decimal of minor units, for rate arithmetic
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Rounds a decimal minor-unit value to Money
    ///
    /// Uses half-to-even (banker's) rounding: 1.5 rounds to 2, 2.5 rounds
    /// to 2, -98.5 rounds to -98. All pricing and commission components are
    /// rounded through this single function so the rule is applied
    /// consistently.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the rounded value does not fit in
    /// an i64.
    pub fn round(value: Decimal) -> Result<Self, MoneyError> {
        let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
        rounded.to_i64().map(Self).ok_or(MoneyError::Overflow)
    }

    /// Checked addition
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Multiplies by an integer factor (e.g., a per-day fee times days)
    pub fn checked_mul(&self, factor: i64) -> Result<Money, MoneyError> {
        self.0
            .checked_mul(factor)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other).expect("Overflow in Money::add")
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other).expect("Overflow in Money::sub")
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Represents a fractional rate (e.g., a commission percentage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.30 for 30%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.30 for 30%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 30.0 for 30%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the complement rate (1 - rate)
    pub fn complement(&self) -> Rate {
        Self {
            value: dec!(1) - self.value,
        }
    }

    /// Applies this rate to a money amount, unrounded
    ///
    /// Callers decide where the rounding boundary sits, since commission
    /// components are rounded independently.
    pub fn apply(&self, money: Money) -> Decimal {
        money.to_decimal() * self.value
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.value * dec!(100)).round_dp(4))
    }
}
