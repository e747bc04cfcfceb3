use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::*;

/// Fields for a transaction the ledger has not assigned an id to yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: Amount,
    pub category: String,
    pub description: String,
    pub occurred_at: NaiveDateTime,
}

/// Fields for a new goal. Saved amount always starts at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGoal {
    pub title: String,
    pub target_amount: Amount,
    pub deadline: NaiveDate,
    pub category: String,
}

/// Partial goal edit; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub target_amount: Option<Amount>,
    pub current_amount: Option<Decimal>,
    pub deadline: Option<NaiveDate>,
    pub category: Option<String>,
}

impl GoalUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.target_amount.is_none()
            && self.current_amount.is_none()
            && self.deadline.is_none()
            && self.category.is_none()
    }
}

/// Immutable snapshot of a session's transactions and goals.
///
/// Mutations borrow the snapshot and return the next one, newest items first.
/// Totals are recomputed from the transaction list on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    goals: Vec<Goal>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn count_of(&self, kind: TransactionKind) -> usize {
        self.transactions.iter().filter(|t| t.kind == kind).count()
    }

    #[must_use]
    pub fn add_transaction(&self, new: NewTransaction) -> Self {
        let txn = Transaction {
            id: TransactionId::generate(),
            kind: new.kind,
            amount: new.amount,
            category: new.category,
            description: new.description,
            occurred_at: new.occurred_at,
        };
        tracing::info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "transaction added");

        let mut transactions = Vec::with_capacity(self.transactions.len() + 1);
        transactions.push(txn);
        transactions.extend(self.transactions.iter().cloned());
        Self {
            transactions,
            goals: self.goals.clone(),
        }
    }

    #[must_use]
    pub fn add_goal(&self, new: NewGoal) -> Self {
        let goal = Goal {
            id: GoalId::generate(),
            title: new.title,
            target_amount: new.target_amount,
            current_amount: Decimal::ZERO,
            deadline: new.deadline,
            category: new.category,
        };
        tracing::info!(id = %goal.id, title = %goal.title, target = %goal.target_amount, "goal added");

        let mut goals = Vec::with_capacity(self.goals.len() + 1);
        goals.push(goal);
        goals.extend(self.goals.iter().cloned());
        Self {
            transactions: self.transactions.clone(),
            goals,
        }
    }

    /// Merge `update` into the goal with `id`. Unknown ids leave the snapshot as is.
    /// The saved amount is re-clamped against the (possibly new) target.
    #[must_use]
    pub fn update_goal(&self, id: GoalId, update: &GoalUpdate) -> Self {
        if self.goal(id).is_none() {
            tracing::debug!(%id, "update for unknown goal ignored");
            return self.clone();
        }
        if update.is_empty() {
            return self.clone();
        }

        let goals = self
            .goals
            .iter()
            .map(|goal| {
                if goal.id != id {
                    return goal.clone();
                }
                let mut merged = goal.clone();
                if let Some(title) = &update.title {
                    merged.title = title.clone();
                }
                if let Some(target) = update.target_amount {
                    merged.target_amount = target;
                }
                if let Some(current) = update.current_amount {
                    merged.current_amount = current;
                }
                if let Some(deadline) = update.deadline {
                    merged.deadline = deadline;
                }
                if let Some(category) = &update.category {
                    merged.category = category.clone();
                }
                merged.current_amount =
                    Goal::clamp_current(merged.current_amount, merged.target_amount);
                merged
            })
            .collect();

        tracing::info!(%id, "goal updated");
        Self {
            transactions: self.transactions.clone(),
            goals,
        }
    }

    /// Add `amount` to a goal's savings, capped at its target.
    #[must_use]
    pub fn contribute(&self, id: GoalId, amount: Amount) -> Self {
        let Some(goal) = self.goal(id) else {
            tracing::debug!(%id, "contribution to unknown goal ignored");
            return self.clone();
        };
        let next = Goal::clamp_current(
            goal.current_amount.saturating_add(amount.value()),
            goal.target_amount,
        );
        self.update_goal(
            id,
            &GoalUpdate {
                current_amount: Some(next),
                ..GoalUpdate::default()
            },
        )
    }

    pub fn total_income(&self) -> Decimal {
        self.sum_of(TransactionKind::Income)
    }

    pub fn total_expenses(&self) -> Decimal {
        self.sum_of(TransactionKind::Expense)
    }

    pub fn balance(&self) -> Decimal {
        self.total_income().saturating_sub(self.total_expenses())
    }

    fn sum_of(&self, kind: TransactionKind) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount.value()))
    }

    /// Expense totals per category, largest first, ties by name.
    pub fn spending_by_category(&self) -> Vec<(String, Decimal)> {
        let mut totals: HashMap<&str, Decimal> = HashMap::new();
        for txn in self.transactions.iter().filter(|t| t.is_expense()) {
            let total = totals.entry(txn.category.as_str()).or_insert(Decimal::ZERO);
            *total = total.saturating_add(txn.amount.value());
        }
        let mut out: Vec<(String, Decimal)> = totals
            .into_iter()
            .map(|(name, total)| (name.to_string(), total))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        out
    }

    pub fn completed_goals(&self) -> usize {
        self.goals.iter().filter(|g| g.is_complete()).count()
    }
}
