//! Price type for representing monetary values.
//!
//! Uses minor-unit integer representation to avoid floating-point
//! precision issues that plague monetary calculations.

use crate::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the storefront prices in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (paise for INR,
/// cents for USD/EUR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Price {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    #[serde(default)]
    pub currency: Currency,
}

impl Price {
    /// Create a new price from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a price from a decimal amount.
    ///
    /// ```
    /// use inkpress_commerce::price::{Price, Currency};
    /// let price = Price::from_decimal(499.0, Currency::INR);
    /// assert_eq!(price.amount_minor, 49900);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_minor = (amount * multiplier as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "₹499.00").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "499.00").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.to_decimal())
    }

    /// Add another price, failing on a currency mismatch.
    pub fn try_add(&self, other: &Price) -> Result<Price, CommerceError> {
        self.checked_op(other, |a, b| a + b)
    }

    /// Subtract another price, failing on a currency mismatch.
    pub fn try_subtract(&self, other: &Price) -> Result<Price, CommerceError> {
        self.checked_op(other, |a, b| a - b)
    }

    fn checked_op(
        &self,
        other: &Price,
        op: impl Fn(i64, i64) -> i64,
    ) -> Result<Price, CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        Ok(Price::new(
            op(self.amount_minor, other.amount_minor),
            self.currency,
        ))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_minor() {
        let p = Price::new(49900, Currency::INR);
        assert_eq!(p.amount_minor, 49900);
        assert_eq!(p.currency, Currency::INR);
    }

    #[test]
    fn test_price_from_decimal() {
        let p = Price::from_decimal(49.99, Currency::USD);
        assert_eq!(p.amount_minor, 4999);
    }

    #[test]
    fn test_price_to_decimal() {
        let p = Price::new(4999, Currency::USD);
        assert!((p.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_price_display() {
        let p = Price::new(49900, Currency::INR);
        assert_eq!(p.display(), "\u{20b9}499.00");
        assert_eq!(p.display_amount(), "499.00");
    }

    #[test]
    fn test_price_addition() {
        let a = Price::new(1000, Currency::INR);
        let b = Price::new(500, Currency::INR);
        let c = a.try_add(&b).unwrap();
        assert_eq!(c.amount_minor, 1500);
    }

    #[test]
    fn test_price_subtraction() {
        let a = Price::new(1000, Currency::INR);
        let b = Price::new(300, Currency::INR);
        let c = a.try_subtract(&b).unwrap();
        assert_eq!(c.amount_minor, 700);
    }

    #[test]
    fn test_price_currency_mismatch() {
        let inr = Price::new(1000, Currency::INR);
        let usd = Price::new(1000, Currency::USD);
        assert!(matches!(
            inr.try_add(&usd),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }

    #[test]
    fn test_price_defaults_to_inr_on_wire() {
        let p: Price = serde_json::from_str(r#"{"amount_minor": 100}"#).unwrap();
        assert_eq!(p.currency, Currency::INR);
    }
}
