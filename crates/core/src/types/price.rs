//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are persisted as plain JSON numbers (`"price": 10.5`) so that
//! stored listings stay readable by any JSON consumer. Arithmetic on them is
//! always done in [`Decimal`], never in floating point.
//!
//! A JSON number is read back through `f64`, which holds any decimal of up
//! to 15 significant digits exactly. Prices are limited to 15 digits so
//! every accepted price reloads unchanged.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Most digits a price may carry, not counting trailing zeros after the point.
pub const MAX_DIGITS: u32 = 15;

const MANTISSA_LIMIT: u128 = 10_u128.pow(MAX_DIGITS);

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("price must be a number, got {0:?}")]
    NotANumber(String),
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
    /// The amount has more digits than can be stored exactly.
    #[error("price can have at most 15 digits, excluding trailing zeros after the point")]
    TooManyDigits,
}

/// A non-negative amount in the marketplace's display currency.
///
/// ## Examples
///
/// ```
/// use ecoswap_core::Price;
///
/// let chair = Price::parse("10").unwrap();
/// assert_eq!(chair.times(2), Price::parse("20").unwrap());
///
/// assert!(Price::parse("").is_err());
/// assert!(Price::parse("ten").is_err());
/// assert!(Price::parse("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero, or
    /// [`PriceError::TooManyDigits`] if it has more than
    /// [`MAX_DIGITS`] digits.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        if amount.normalize().mantissa().unsigned_abs() >= MANTISSA_LIMIT {
            return Err(PriceError::TooManyDigits);
        }
        Ok(Self(amount))
    }

    /// Parse a price from user-entered text.
    ///
    /// Surrounding whitespace is ignored. Anything other than a plain
    /// decimal number is rejected rather than coerced.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, not a number, negative or
    /// has too many digits.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount = Decimal::from_str(s).map_err(|_| PriceError::NotANumber(s.to_owned()))?;
        Self::new(amount)
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns this price multiplied by a quantity.
    #[must_use]
    pub fn times(self, qty: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(qty)))
    }

    /// Format for display with the given currency (e.g., "₹10.5").
    #[must_use]
    pub fn display(&self, currency: CurrencyCode) -> String {
        format!("{}{}", currency.symbol(), self.0.normalize())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Parsing the decimal text yields the nearest f64
        let value = self
            .0
            .normalize()
            .to_string()
            .parse::<f64>()
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_f64(value)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a non-negative number with at most {MAX_DIGITS} digits")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        Price::new(Decimal::from(v)).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        Price::new(Decimal::from(v)).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        // f64 displays as the shortest decimal that reads back to itself
        let amount = Decimal::from_str(&v.to_string())
            .map_err(|_| E::invalid_value(Unexpected::Float(v), &self))?;
        Price::new(amount).map_err(E::custom)
    }
}

/// ISO 4217 currency codes supported for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Currency symbol used when rendering prices.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::INR => "INR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Self::INR),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_prices() {
        assert_eq!(Price::parse("10").unwrap().amount(), Decimal::from(10));
        assert_eq!(Price::parse(" 10.50 ").unwrap().amount(), Decimal::new(1050, 2));
        assert_eq!(Price::parse("0").unwrap(), Price::ZERO);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Price::parse("   "), Err(PriceError::Empty));
        assert!(matches!(
            Price::parse("10abc"),
            Err(PriceError::NotANumber(_))
        ));
        assert_eq!(Price::parse("-0.01"), Err(PriceError::Negative));
    }

    #[test]
    fn test_negative_zero_is_allowed() {
        assert!(Price::parse("-0").is_ok());
    }

    #[test]
    fn test_times_and_sum() {
        let chair = Price::parse("10").unwrap();
        let lamp = Price::parse("2.25").unwrap();
        let total: Price = [chair.times(2), lamp.times(4)].into_iter().sum();
        assert_eq!(total, Price::parse("29").unwrap());
    }

    #[test]
    fn test_persists_as_json_number() {
        let price = Price::parse("10.5").unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "10.5");

        let from_int: Price = serde_json::from_str("10").unwrap();
        assert_eq!(from_int, Price::parse("10").unwrap());
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-3").is_err());
        assert!(serde_json::from_str::<Price>("-0.5").is_err());
    }

    #[test]
    fn test_rejects_more_than_fifteen_digits() {
        assert_eq!(
            Price::parse("79228162514264337593543950335"),
            Err(PriceError::TooManyDigits)
        );
        assert_eq!(
            Price::parse("0.12345678901234567890"),
            Err(PriceError::TooManyDigits)
        );
        assert_eq!(Price::parse("1000000000000000"), Err(PriceError::TooManyDigits));

        // Trailing zeros are not significant
        assert!(Price::parse("10.000000000000000000").is_ok());
        assert!(Price::parse("999999999999999").is_ok());
    }

    #[test]
    fn test_precise_prices_reload_unchanged() {
        for text in ["0.1", "0.3", "12345.6789012345", "999999999999999", "0.000000000000001"] {
            let price = Price::parse(text).unwrap();
            let json = serde_json::to_string(&price).unwrap();
            let reloaded: Price = serde_json::from_str(&json).unwrap();
            assert_eq!(reloaded, price, "{text} came back as {json}");
        }
    }

    #[test]
    fn test_deserialize_rejects_unstorable_numbers() {
        assert!(serde_json::from_str::<Price>("7.922816251426434e28").is_err());
        assert!(serde_json::from_str::<Price>("0.12345678901234568").is_err());
        assert!(serde_json::from_str::<Price>("\"10\"").is_err());
    }

    #[test]
    fn test_display() {
        let price = Price::parse("20.00").unwrap();
        assert_eq!(price.to_string(), "20");
        assert_eq!(price.display(CurrencyCode::INR), "₹20");
        assert_eq!(
            Price::parse("3.5").unwrap().display(CurrencyCode::GBP),
            "£3.5"
        );
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!(CurrencyCode::default(), CurrencyCode::INR);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }
}
