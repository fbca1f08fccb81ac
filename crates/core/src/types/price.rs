//! Type-safe price representation using decimal arithmetic.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts are held as [`Decimal`] so cart totals stay exact; summing
/// `45 + 35` is `80`, never `79.999…`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero price in USD.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO, CurrencyCode::USD)
    }

    /// Create a USD price from a whole-dollar amount.
    #[must_use]
    pub fn from_dollars(dollars: u64) -> Self {
        Self::new(Decimal::from(dollars), CurrencyCode::USD)
    }

    /// Add another price, returning `None` on overflow or currency mismatch.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        if self.currency_code != other.currency_code {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Self::new(amount, self.currency_code))
    }

    /// True if the amount is zero or positive.
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        self.amount >= Decimal::ZERO
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Currency symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dollars() {
        let price = Price::from_dollars(45);
        assert_eq!(price.amount, Decimal::from(45));
        assert_eq!(price.currency_code, CurrencyCode::USD);
    }

    #[test]
    fn test_checked_add() {
        let a = Price::from_dollars(45);
        let b = Price::from_dollars(35);
        assert_eq!(a.checked_add(b).unwrap(), Price::from_dollars(80));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let usd = Price::from_dollars(10);
        let eur = Price::new(Decimal::from(10), CurrencyCode::EUR);
        assert!(usd.checked_add(eur).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_dollars(45).to_string(), "$45.00");
        assert_eq!(Price::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_ordering() {
        assert!(Price::from_dollars(35) < Price::from_dollars(45));
    }
}
