//! Money and rate types with precise decimal arithmetic
//!
//! Limit accounting must be exact: a claim's requested amount has to equal
//! the patient and payer portions to the cent, so all monetary math runs on
//! rust_decimal. Floating point is not used anywhere in the engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Currency codes following ISO 4217
///
/// The engine adjudicates each claim in the currency of its policy; cross
/// currency arithmetic is rejected rather than converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    INR,
    AED,
    SGD,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::INR => "INR",
            Currency::AED => "AED",
            Currency::SGD => "SGD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money and rate operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid rate {0}: must be between 0 and 1 inclusive")]
    InvalidRate(Decimal),
}

/// A monetary amount with associated currency
///
/// Amounts are kept at 4 decimal places internally and rounded to the
/// currency's standard precision at presentation boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Rounds to the currency's standard decimal places
    pub fn round_to_currency(&self) -> Self {
        Self {
            amount: self.amount.round_dp(self.currency.decimal_places()),
            currency: self.currency,
        }
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.require_same_currency(other)?;
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.require_same_currency(other)?;
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// The smaller of two amounts, failing on currency mismatch
    pub fn checked_min(&self, other: &Money) -> Result<Money, MoneyError> {
        self.require_same_currency(other)?;
        Ok(if self.amount <= other.amount {
            *self
        } else {
            *other
        })
    }

    /// Multiplies by a scalar (e.g., quantity or a coverage rate value)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }

    /// Clamps a negative amount up to zero
    ///
    /// Remaining-limit arithmetic can go below zero when a member has already
    /// consumed more than a limit allows; the engine treats that as nothing
    /// remaining, never as a negative entitlement.
    pub fn clamp_floor_zero(&self) -> Self {
        if self.is_negative() {
            Self::zero(self.currency)
        } else {
            *self
        }
    }

    fn require_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places() as usize;
        write!(f, "{} {:.dp$}", self.currency.code(), self.amount, dp = dp)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Currency mismatch in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other)
            .expect("Currency mismatch in Money::sub")
    }
}

/// A coverage percentage stored as a decimal in [0, 1]
///
/// A policy covering 90% of a service carries `Rate(0.90)`. Construction
/// validates the range so resolved decisions can never over- or under-state
/// the payer share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value in [0, 1]
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value < dec!(0) || value > dec!(1) {
            return Err(MoneyError::InvalidRate(value));
        }
        Ok(Self { value })
    }

    /// Creates a rate from a percentage (e.g., 90 for 90%)
    pub fn from_percent(percentage: Decimal) -> Result<Self, MoneyError> {
        Self::new(percentage / dec!(100))
    }

    /// Full coverage (100%)
    pub fn full() -> Self {
        Self { value: dec!(1) }
    }

    /// No coverage (0%)
    pub fn zero() -> Self {
        Self { value: dec!(0) }
    }

    /// Returns the rate as a decimal in [0, 1]
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.value * dec!(100)).round_dp(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(250.75), Currency::USD);
        assert_eq!(m.amount(), dec!(250.75));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(1000.00), Currency::USD);
        let b = Money::new(dec!(400.00), Currency::USD);

        assert_eq!((a + b).amount(), dec!(1400.00));
        assert_eq!((a - b).amount(), dec!(600.00));
    }

    #[test]
    fn test_currency_mismatch() {
        let usd = Money::new(dec!(100.00), Currency::USD);
        let eur = Money::new(dec!(100.00), Currency::EUR);

        let result = usd.checked_add(&eur);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_checked_min() {
        let a = Money::new(dec!(500), Currency::USD);
        let b = Money::new(dec!(1000), Currency::USD);

        assert_eq!(a.checked_min(&b).unwrap(), a);
        assert_eq!(b.checked_min(&a).unwrap(), a);
    }

    #[test]
    fn test_clamp_floor_zero() {
        let negative = Money::new(dec!(-250), Currency::USD);
        assert_eq!(negative.clamp_floor_zero(), Money::zero(Currency::USD));

        let positive = Money::new(dec!(250), Currency::USD);
        assert_eq!(positive.clamp_floor_zero(), positive);
    }

    #[test]
    fn test_rate_bounds() {
        assert!(Rate::new(dec!(0)).is_ok());
        assert!(Rate::new(dec!(1)).is_ok());
        assert!(Rate::new(dec!(1.01)).is_err());
        assert!(Rate::new(dec!(-0.1)).is_err());
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::from_percent(dec!(90)).unwrap();
        let amount = Money::new(dec!(1000.00), Currency::USD);

        assert_eq!(rate.apply(&amount).amount(), dec!(900.00));
    }
}
