//! Monthly recurring prices using decimal arithmetic.
//!
//! Prices are held as [`Decimal`] so bundle totals are exact. A discount of
//! 10% on $89.98 is exactly $8.998, and the running figures never pick up
//! binary floating-point noise no matter how many times a bundle is edited.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`MonthlyPrice`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount was below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
    /// The input could not be read as a decimal amount.
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// A non-negative monthly charge with two decimal places.
///
/// Inputs with more precision are rounded half away from zero to the cent,
/// and every value is stored at scale 2, so `49.9` is held as `49.90`.
///
/// ```
/// use black_cable_core::MonthlyPrice;
///
/// let price: MonthlyPrice = "$49.99".parse().unwrap();
/// assert_eq!(price.to_string(), "$49.99");
/// assert!("-1".parse::<MonthlyPrice>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct MonthlyPrice(Decimal);

impl MonthlyPrice {
    /// Number of decimal places every price is stored with.
    pub const SCALE: u32 = 2;

    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount in dollars.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        let mut cents =
            amount.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        cents.rescale(Self::SCALE);
        // -0.00 normalizes to 0.00
        cents.set_sign_positive(true);
        Ok(Self(cents))
    }

    /// Create a price from a whole number of cents.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `cents` is below zero.
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        Self::new(Decimal::new(cents, Self::SCALE))
    }

    /// The amount in dollars.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for MonthlyPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl std::str::FromStr for MonthlyPrice {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let amount = Decimal::from_str_exact(digits)
            .map_err(|_| PriceError::Invalid(trimmed.to_owned()))?;
        Self::new(amount)
    }
}

impl TryFrom<Decimal> for MonthlyPrice {
    type Error = PriceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MonthlyPrice> for Decimal {
    fn from(price: MonthlyPrice) -> Self {
        price.0
    }
}

/// Format a dollar amount rounded to the cent, e.g. `$80.98`.
///
/// Used for derived figures such as discounts and totals that may carry more
/// than two decimal places internally.
#[must_use]
pub fn format_dollars(amount: Decimal) -> String {
    let cents =
        amount.round_dp_with_strategy(MonthlyPrice::SCALE, RoundingStrategy::MidpointAwayFromZero);
    format!("${cents:.2}")
}
