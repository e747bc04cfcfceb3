use rust_decimal::Decimal;
use thiserror::Error;

/// Input rejected before it reaches a store. Shown to the user as a status
/// notification; the submission is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Missing information: please fill in the {0} field")]
    MissingField(&'static str),

    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(Decimal),

    #[error("Amount {0} is too large (max 1,000,000,000)")]
    AmountTooLarge(Decimal),

    #[error("'{0}' is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("Unknown transaction type '{0}', expected income or expense")]
    InvalidKind(String),
}
