use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GoalId(pub Uuid);

impl GoalId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for GoalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A savings goal. `current_amount` stays within `[0, target_amount]`; the ledger
/// clamps every change that goes through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    pub target_amount: Amount,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
    pub category: String,
}

impl Goal {
    pub const CATEGORIES: &'static [&'static str] = &[
        "Electronics",
        "Travel",
        "Clothing",
        "Education",
        "Entertainment",
        "Other",
    ];

    /// Clamp a candidate saved amount into `[0, target]`.
    pub fn clamp_current(value: Decimal, target: Amount) -> Decimal {
        value.max(Decimal::ZERO).min(target.value())
    }

    pub fn remaining(&self) -> Decimal {
        self.target_amount.value() - self.current_amount
    }

    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount.value()
    }

    /// Progress in percent, 0-100.
    pub fn progress_percent(&self) -> Decimal {
        (self.current_amount / self.target_amount.value() * Decimal::ONE_HUNDRED)
            .min(Decimal::ONE_HUNDRED)
    }

    /// Whole days until the deadline. Zero or negative once the deadline is reached.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }
}
