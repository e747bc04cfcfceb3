#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::*;

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn txn(kind: TransactionKind, amount: Decimal, category: &str) -> NewTransaction {
    NewTransaction {
        kind,
        amount: Amount::new(amount).unwrap(),
        category: category.into(),
        description: format!("{category} test"),
        occurred_at: at(2024, 2, 1),
    }
}

fn goal(title: &str, target: Decimal) -> NewGoal {
    NewGoal {
        title: title.into(),
        target_amount: Amount::new(target).unwrap(),
        deadline: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        category: "Other".into(),
    }
}

// ── Transactions ──────────────────────────────────────────────

#[test]
fn test_empty_ledger_totals() {
    let ledger = Ledger::new();
    assert_eq!(ledger.total_income(), Decimal::ZERO);
    assert_eq!(ledger.total_expenses(), Decimal::ZERO);
    assert_eq!(ledger.balance(), Decimal::ZERO);
    assert!(ledger.transactions().is_empty());
}

#[test]
fn test_add_transaction_prepends() {
    let ledger = Ledger::new()
        .add_transaction(txn(TransactionKind::Income, dec!(10), "Job"))
        .add_transaction(txn(TransactionKind::Expense, dec!(3), "Food"));

    assert_eq!(ledger.transaction_count(), 2);
    assert_eq!(ledger.transactions()[0].category, "Food");
    assert_eq!(ledger.transactions()[1].category, "Job");
}

#[test]
fn test_add_transaction_leaves_original_snapshot() {
    let before = Ledger::new();
    let after = before.add_transaction(txn(TransactionKind::Income, dec!(10), "Job"));
    assert!(before.transactions().is_empty());
    assert_eq!(after.transaction_count(), 1);
}

#[test]
fn test_transaction_ids_unique() {
    let ledger = Ledger::new()
        .add_transaction(txn(TransactionKind::Income, dec!(1), "Gift"))
        .add_transaction(txn(TransactionKind::Income, dec!(1), "Gift"));
    assert_ne!(ledger.transactions()[0].id, ledger.transactions()[1].id);
}

#[test]
fn test_totals_by_kind() {
    let ledger = Ledger::new()
        .add_transaction(txn(TransactionKind::Income, dec!(20.50), "Job"))
        .add_transaction(txn(TransactionKind::Income, dec!(4.50), "Gift"))
        .add_transaction(txn(TransactionKind::Expense, dec!(7.25), "Food"));

    assert_eq!(ledger.total_income(), dec!(25.00));
    assert_eq!(ledger.total_expenses(), dec!(7.25));
    assert_eq!(ledger.balance(), dec!(17.75));
    assert_eq!(ledger.count_of(TransactionKind::Income), 2);
    assert_eq!(ledger.count_of(TransactionKind::Expense), 1);
}

#[test]
fn test_balance_can_go_negative() {
    let ledger = Ledger::new().add_transaction(txn(TransactionKind::Expense, dec!(12), "Shopping"));
    assert_eq!(ledger.balance(), dec!(-12));
}

#[test]
fn test_totals_of_max_amounts_do_not_overflow() {
    let ledger = Ledger::new()
        .add_transaction(txn(TransactionKind::Income, Amount::MAX, "Job"))
        .add_transaction(txn(TransactionKind::Income, Amount::MAX, "Job"))
        .add_transaction(txn(TransactionKind::Expense, Amount::MAX, "Shopping"));
    assert_eq!(ledger.total_income(), dec!(2000000000));
    assert_eq!(ledger.balance(), Amount::MAX);
    assert_eq!(
        ledger.spending_by_category(),
        vec![("Shopping".to_string(), Amount::MAX)]
    );
}

#[test]
fn test_seed_balance_is_ten() {
    let ledger = Ledger::seeded();
    assert_eq!(ledger.total_income(), dec!(50));
    assert_eq!(ledger.total_expenses(), dec!(40));
    assert_eq!(ledger.balance(), dec!(10));
}

#[test]
fn test_seed_lists_allowance_first() {
    let ledger = Ledger::seeded();
    let descriptions: Vec<&str> = ledger
        .transactions()
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        vec!["Weekly allowance", "Lunch with friends", "Movie tickets"]
    );
}

#[test]
fn test_seed_goals() {
    let ledger = Ledger::seeded();
    assert_eq!(ledger.goals().len(), 2);
    let headset = &ledger.goals()[0];
    assert_eq!(headset.title, "New Gaming Headset");
    assert_eq!(headset.current_amount, dec!(75));
    assert_eq!(headset.target_amount.value(), dec!(150));
    assert_eq!(ledger.goals()[1].title, "Summer Trip");
}

#[test]
fn test_spending_by_category_sorted() {
    let ledger = Ledger::new()
        .add_transaction(txn(TransactionKind::Expense, dec!(5), "Food"))
        .add_transaction(txn(TransactionKind::Expense, dec!(20), "Shopping"))
        .add_transaction(txn(TransactionKind::Expense, dec!(10), "Food"))
        .add_transaction(txn(TransactionKind::Income, dec!(100), "Job"));

    let spending = ledger.spending_by_category();
    assert_eq!(
        spending,
        vec![("Shopping".to_string(), dec!(20)), ("Food".to_string(), dec!(15))]
    );
}

// ── Goals ─────────────────────────────────────────────────────

#[test]
fn test_add_goal_starts_at_zero_and_prepends() {
    let ledger = Ledger::new()
        .add_goal(goal("Bike", dec!(200)))
        .add_goal(goal("Phone", dec!(400)));

    assert_eq!(ledger.goals()[0].title, "Phone");
    assert!(ledger.goals().iter().all(|g| g.current_amount == Decimal::ZERO));
}

#[test]
fn test_contribute_clamps_to_target() {
    let ledger = Ledger::seeded();
    let headset = ledger.goals()[0].id;

    let ledger = ledger.contribute(headset, Amount::new(dec!(100)).unwrap());
    let updated = ledger.goal(headset).unwrap();
    assert_eq!(updated.current_amount, dec!(150));
    assert!(updated.is_complete());
    assert_eq!(ledger.completed_goals(), 1);
}

#[test]
fn test_contribute_adds_below_target() {
    let ledger = Ledger::new().add_goal(goal("Bike", dec!(200)));
    let id = ledger.goals()[0].id;
    let ledger = ledger
        .contribute(id, Amount::new(dec!(5)).unwrap())
        .contribute(id, Amount::new(dec!(25)).unwrap());
    assert_eq!(ledger.goal(id).unwrap().current_amount, dec!(30));
}

#[test]
fn test_contribute_max_to_max_target_saturates() {
    let ledger = Ledger::new().add_goal(goal("Moon", Amount::MAX));
    let id = ledger.goals()[0].id;
    let max = Amount::new(Amount::MAX).unwrap();
    let ledger = ledger.contribute(id, max).contribute(id, max);
    let moon = ledger.goal(id).unwrap();
    assert_eq!(moon.current_amount, Amount::MAX);
    assert!(moon.is_complete());
}

#[test]
fn test_contribute_unknown_goal_is_noop() {
    let ledger = Ledger::seeded();
    let after = ledger.contribute(GoalId::generate(), Amount::new(dec!(5)).unwrap());
    assert_eq!(after, ledger);
}

#[test]
fn test_update_goal_unknown_id_is_noop() {
    let ledger = Ledger::seeded();
    let update = GoalUpdate {
        title: Some("Renamed".into()),
        ..GoalUpdate::default()
    };
    assert_eq!(ledger.update_goal(GoalId::generate(), &update), ledger);
}

#[test]
fn test_update_goal_merges_fields() {
    let ledger = Ledger::new().add_goal(goal("Bike", dec!(200)));
    let id = ledger.goals()[0].id;
    let deadline = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();

    let ledger = ledger.update_goal(
        id,
        &GoalUpdate {
            title: Some("Mountain Bike".into()),
            deadline: Some(deadline),
            ..GoalUpdate::default()
        },
    );
    let g = ledger.goal(id).unwrap();
    assert_eq!(g.title, "Mountain Bike");
    assert_eq!(g.deadline, deadline);
    assert_eq!(g.category, "Other");
    assert_eq!(g.target_amount.value(), dec!(200));
}

#[test]
fn test_update_goal_lowering_target_clamps_saved() {
    let ledger = Ledger::seeded();
    let headset = ledger.goals()[0].id;
    let ledger = ledger.update_goal(
        headset,
        &GoalUpdate {
            target_amount: Some(Amount::new(dec!(60)).unwrap()),
            ..GoalUpdate::default()
        },
    );
    assert_eq!(ledger.goal(headset).unwrap().current_amount, dec!(60));
}

#[test]
fn test_update_goal_negative_saved_clamps_to_zero() {
    let ledger = Ledger::seeded();
    let headset = ledger.goals()[0].id;
    let ledger = ledger.update_goal(
        headset,
        &GoalUpdate {
            current_amount: Some(dec!(-10)),
            ..GoalUpdate::default()
        },
    );
    assert_eq!(ledger.goal(headset).unwrap().current_amount, Decimal::ZERO);
}

#[test]
fn test_update_goal_touches_only_target() {
    let ledger = Ledger::seeded();
    let trip = ledger.goals()[1].clone();
    let headset = ledger.goals()[0].id;
    let ledger = ledger.update_goal(
        headset,
        &GoalUpdate {
            category: Some("Gaming".into()),
            ..GoalUpdate::default()
        },
    );
    assert_eq!(ledger.goals()[1], trip);
    assert_eq!(ledger.goals()[0].category, "Gaming");
}

#[test]
fn test_goal_update_is_empty() {
    assert!(GoalUpdate::default().is_empty());
    assert!(!GoalUpdate {
        category: Some("x".into()),
        ..GoalUpdate::default()
    }
    .is_empty());
}

// ── Stores ────────────────────────────────────────────────────

#[test]
fn test_stores_seeded_by_config() {
    let config = crate::config::LedgerConfig::default();
    let stores = Stores::new(&config);
    assert_eq!(stores.ledger.snapshot().balance(), dec!(10));
    assert!(!stores.auth.is_authenticated());
}

#[test]
fn test_stores_empty_when_seeding_disabled() {
    let config = crate::config::LedgerConfig {
        seed_demo_data: false,
        ..crate::config::LedgerConfig::default()
    };
    let stores = Stores::new(&config);
    assert_eq!(stores.ledger.snapshot(), &Ledger::new());
}
