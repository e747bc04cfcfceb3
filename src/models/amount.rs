use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::FormError;

/// A strictly positive money amount. Direction (income/expense, deposit) is carried
/// by whatever holds the amount, never by its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Largest amount a single entry may carry.
    pub const MAX: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

    pub fn new(value: Decimal) -> Result<Self, FormError> {
        if value <= Decimal::ZERO {
            Err(FormError::NonPositiveAmount(value))
        } else if value > Self::MAX {
            Err(FormError::AmountTooLarge(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Parse user input such as `"12.50"` or `"$12.50"`.
    pub fn parse(input: &str) -> Result<Self, FormError> {
        let cleaned: String = input
            .trim()
            .chars()
            .filter(|c| *c != '$' && *c != ',')
            .collect();
        let value = Decimal::from_str(&cleaned)
            .map_err(|_| FormError::InvalidAmount(input.trim().to_string()))?;
        Self::new(value)
    }

    pub fn value(self) -> Decimal {
        self.0
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
