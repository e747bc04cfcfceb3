use rust_decimal::Decimal;

use crate::models::TransactionKind;
use crate::store::Ledger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Achievement {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) earned: bool,
}

/// Achievements for the profile page. Those the ledger can answer are derived
/// from it; budget and reading streaks are not tracked and stay locked.
pub(crate) fn achievements(ledger: &Ledger) -> Vec<Achievement> {
    vec![
        Achievement {
            title: "First Goal Created",
            description: "Created your first savings goal",
            earned: !ledger.goals().is_empty(),
        },
        Achievement {
            title: "Expense Tracker",
            description: "Logged 10 expenses",
            earned: ledger.count_of(TransactionKind::Expense) >= 10,
        },
        Achievement {
            title: "Savings Champion",
            description: "Saved $100 in a month",
            earned: ledger.balance() >= Decimal::ONE_HUNDRED,
        },
        Achievement {
            title: "Goal Achiever",
            description: "Completed your first goal",
            earned: ledger.completed_goals() > 0,
        },
        Achievement {
            title: "Budget Master",
            description: "Stayed under budget for 3 months",
            earned: false,
        },
        Achievement {
            title: "Investment Explorer",
            description: "Read 5 investment articles",
            earned: false,
        },
    ]
}
