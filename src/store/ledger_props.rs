//! Property tests for ledger aggregates and goal clamping.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::*;
use crate::models::*;

/// Positive amounts from 0.01 to 10,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![Just(TransactionKind::Income), Just(TransactionKind::Expense)]
}

fn new_txn(kind: TransactionKind, amount: Decimal) -> NewTransaction {
    NewTransaction {
        kind,
        amount: Amount::new(amount).unwrap(),
        category: "Other".into(),
        description: "generated".into(),
        occurred_at: NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    }
}

proptest! {
    #[test]
    fn balance_matches_totals_after_every_add(
        entries in prop::collection::vec((kind_strategy(), positive_amount()), 0..40)
    ) {
        let mut ledger = Ledger::new();
        let mut income = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;
        for (kind, amount) in entries {
            ledger = ledger.add_transaction(new_txn(kind, amount));
            match kind {
                TransactionKind::Income => income += amount,
                TransactionKind::Expense => expenses += amount,
            }
            prop_assert_eq!(ledger.balance(), ledger.total_income() - ledger.total_expenses());
            prop_assert_eq!(ledger.total_income(), income);
            prop_assert_eq!(ledger.total_expenses(), expenses);
        }
    }

    #[test]
    fn newest_transaction_is_first(
        entries in prop::collection::vec((kind_strategy(), positive_amount()), 1..20)
    ) {
        let mut ledger = Ledger::new();
        for (kind, amount) in entries {
            ledger = ledger.add_transaction(new_txn(kind, amount));
            let first = &ledger.transactions()[0];
            prop_assert_eq!(first.kind, kind);
            prop_assert_eq!(first.amount.value(), amount);
        }
    }

    #[test]
    fn contributions_stay_within_target(
        target in positive_amount(),
        contributions in prop::collection::vec(positive_amount(), 0..30)
    ) {
        let mut ledger = Ledger::new().add_goal(NewGoal {
            title: "Goal".into(),
            target_amount: Amount::new(target).unwrap(),
            deadline: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            category: "Other".into(),
        });
        let id = ledger.goals()[0].id;
        for amount in contributions {
            ledger = ledger.contribute(id, Amount::new(amount).unwrap());
            let goal = ledger.goal(id).unwrap();
            prop_assert!(goal.current_amount >= Decimal::ZERO);
            prop_assert!(goal.current_amount <= goal.target_amount.value());
        }
    }

    #[test]
    fn saved_amount_edits_are_clamped(
        target in positive_amount(),
        saved in -1_000_000i64..2_000_000i64
    ) {
        let ledger = Ledger::new().add_goal(NewGoal {
            title: "Goal".into(),
            target_amount: Amount::new(target).unwrap(),
            deadline: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            category: "Other".into(),
        });
        let id = ledger.goals()[0].id;
        let ledger = ledger.update_goal(id, &GoalUpdate {
            current_amount: Some(Decimal::new(saved, 2)),
            ..GoalUpdate::default()
        });
        let goal = ledger.goal(id).unwrap();
        prop_assert!(goal.current_amount >= Decimal::ZERO);
        prop_assert!(goal.current_amount <= goal.target_amount.value());
    }
}
