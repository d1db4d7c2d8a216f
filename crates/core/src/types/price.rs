//! Non-negative unit prices using decimal arithmetic.
//!
//! Prices are kept as [`Decimal`] in memory so line totals never pick up
//! binary floating point drift. The persisted layout stores them as plain
//! JSON numbers, which is what the storefront has always written.
//!
//! A JSON number only holds about 15 significant digits, so accepted prices
//! are capped at [`UnitPrice::MAX_WHOLE_UNITS`] with at most
//! [`UnitPrice::MAX_SCALE`] decimal places. Every accepted price survives a
//! store and load unchanged, and a line total for any `u32` quantity fits in
//! a [`Decimal`].

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing a [`UnitPrice`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("price is not a number: {0}")]
    Invalid(String),
    /// The amount is below zero.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
    /// The amount is above [`UnitPrice::MAX_WHOLE_UNITS`].
    #[error("price is too large: {0}")]
    TooLarge(Decimal),
    /// The amount has more than [`UnitPrice::MAX_SCALE`] decimal places.
    #[error("price has more than {max} decimal places: {amount}")]
    TooPrecise { amount: Decimal, max: u32 },
}

/// Price of a single unit of a product, currency-agnostic.
///
/// ```
/// use ascii_cart_core::UnitPrice;
/// use rust_decimal::Decimal;
///
/// let price = UnitPrice::parse("19.90").unwrap();
/// assert_eq!(price.amount(), Decimal::new(1990, 2));
/// assert!(UnitPrice::parse("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UnitPrice(Decimal);

impl UnitPrice {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest accepted price, in whole currency units.
    pub const MAX_WHOLE_UNITS: u32 = 1_000_000_000;

    /// Most decimal places a price may carry.
    pub const MAX_SCALE: u32 = 4;

    /// Create a price from a decimal amount.
    ///
    /// Trailing zeros do not count towards the scale: `10.50000` is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero,
    /// [`PriceError::TooLarge`] if it is above [`Self::MAX_WHOLE_UNITS`], or
    /// [`PriceError::TooPrecise`] if it has more than [`Self::MAX_SCALE`]
    /// decimal places.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        if amount > Decimal::from(Self::MAX_WHOLE_UNITS) {
            return Err(PriceError::TooLarge(amount));
        }
        if amount.normalize().scale() > Self::MAX_SCALE {
            return Err(PriceError::TooPrecise {
                amount,
                max: Self::MAX_SCALE,
            });
        }
        Ok(Self(amount))
    }

    /// Create a price from an amount in cents.
    ///
    /// # Errors
    ///
    /// Returns an error if `cents` is below zero or above the maximum price.
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        Self::new(Decimal::new(cents, 2))
    }

    /// Parse a price from a numeric string such as a `data-price` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Invalid`] if the input is not a decimal number,
    /// or any error of [`Self::new`] for an out-of-range amount.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| PriceError::Invalid(trimmed.to_owned()))?;
        Self::new(amount)
    }

    /// Returns the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Total for `quantity` units.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Decimal {
        self.0.saturating_mul(Decimal::from(quantity))
    }
}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for UnitPrice {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for UnitPrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for UnitPrice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The f64 round trip can leave noise far below the last kept place
        let amount: Decimal = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount.round_dp(Self::MAX_SCALE)).map_err(serde::de::Error::custom)
    }
}
