//! Starting ("from") price shown on catalog cards.
//!
//! Catalog rows carry an optional `price_from`. `None` means "price on
//! request"; a present value is never negative.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`StartingPrice`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative starting price in Indian rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct StartingPrice(Decimal);

impl StartingPrice {
    /// Fraction digits kept when rendering, matching `en-IN` number formatting.
    const DISPLAY_FRACTION_DIGITS: u32 = 3;

    /// Create a starting price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// The underlying amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Render as rupees with Indian digit grouping, e.g. `₹1,25,000`.
    #[must_use]
    pub fn display_inr(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        let text = rounded.to_string();
        let (whole, fraction) = text.split_once('.').map_or((text.as_str(), None), |(w, f)| (w, Some(f)));

        let mut out = String::from("₹");
        out.push_str(&group_indian(whole));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

/// Group digits the Indian way: the last three together, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

impl TryFrom<Decimal> for StartingPrice {
    type Error = PriceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StartingPrice> for Decimal {
    fn from(price: StartingPrice) -> Self {
        price.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(s: &str) -> StartingPrice {
        StartingPrice::new(s.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_negative_rejected() {
        let result = StartingPrice::new(Decimal::new(-1, 0));
        assert!(matches!(result, Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_zero_allowed() {
        assert!(StartingPrice::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(price("0").display_inr(), "₹0");
        assert_eq!(price("450").display_inr(), "₹450");
        assert_eq!(price("999.50").display_inr(), "₹999.5");
    }

    #[test]
    fn test_display_indian_grouping() {
        assert_eq!(price("1000").display_inr(), "₹1,000");
        assert_eq!(price("100000").display_inr(), "₹1,00,000");
        assert_eq!(price("1234567.5").display_inr(), "₹12,34,567.5");
        assert_eq!(price("123456789").display_inr(), "₹12,34,56,789");
    }

    #[test]
    fn test_display_rounds_to_three_places() {
        assert_eq!(price("12.34567").display_inr(), "₹12.346");
    }

    #[test]
    fn test_deserialize_from_number_and_string() {
        let from_number: StartingPrice = serde_json::from_str("450").unwrap();
        assert_eq!(from_number, price("450"));
        let from_float: StartingPrice = serde_json::from_str("12.5").unwrap();
        assert_eq!(from_float, price("12.5"));
        assert!(serde_json::from_str::<StartingPrice>("-3").is_err());
    }
}
