use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::ledger::{GoalUpdate, Ledger, NewGoal, NewTransaction};
use crate::models::{Amount, TransactionKind};

struct SeedTxn {
    kind: TransactionKind,
    amount: i64,
    category: &'static str,
    description: &'static str,
    date: (i32, u32, u32),
}

struct SeedGoal {
    title: &'static str,
    target: i64,
    saved: i64,
    deadline: (i32, u32, u32),
    category: &'static str,
}

// Each entry is prepended, so the last one listed ends up on top.
const TRANSACTIONS: &[SeedTxn] = &[
    SeedTxn {
        kind: TransactionKind::Expense,
        amount: 25,
        category: "Entertainment",
        description: "Movie tickets",
        date: (2024, 1, 17),
    },
    SeedTxn {
        kind: TransactionKind::Expense,
        amount: 15,
        category: "Food",
        description: "Lunch with friends",
        date: (2024, 1, 16),
    },
    SeedTxn {
        kind: TransactionKind::Income,
        amount: 50,
        category: "Pocket Money",
        description: "Weekly allowance",
        date: (2024, 1, 15),
    },
];

const GOALS: &[SeedGoal] = &[
    SeedGoal {
        title: "Summer Trip",
        target: 500,
        saved: 120,
        deadline: (2024, 6, 15),
        category: "Travel",
    },
    SeedGoal {
        title: "New Gaming Headset",
        target: 150,
        saved: 75,
        deadline: (2024, 3, 1),
        category: "Electronics",
    },
];

impl Ledger {
    /// Demo ledger a new session starts with.
    pub fn seeded() -> Self {
        let mut ledger = Ledger::new();

        for seed in TRANSACTIONS {
            let (Some(amount), Some(day)) = (
                Amount::new(Decimal::from(seed.amount)).ok(),
                date(seed.date),
            ) else {
                continue;
            };
            let Some(occurred_at) = day.and_hms_opt(12, 0, 0) else {
                continue;
            };
            ledger = ledger.add_transaction(NewTransaction {
                kind: seed.kind,
                amount,
                category: seed.category.to_string(),
                description: seed.description.to_string(),
                occurred_at,
            });
        }

        for seed in GOALS {
            let (Some(target), Some(deadline)) = (
                Amount::new(Decimal::from(seed.target)).ok(),
                date(seed.deadline),
            ) else {
                continue;
            };
            ledger = ledger.add_goal(NewGoal {
                title: seed.title.to_string(),
                target_amount: target,
                deadline,
                category: seed.category.to_string(),
            });
            if let Some(id) = ledger.goals().first().map(|g| g.id) {
                ledger = ledger.update_goal(
                    id,
                    &GoalUpdate {
                        current_amount: Some(Decimal::from(seed.saved)),
                        ..GoalUpdate::default()
                    },
                );
            }
        }

        ledger
    }
}

fn date((y, m, d): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}
