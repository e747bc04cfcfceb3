//! Session state: the auth store and the ledger store, owned together by
//! [`Stores`] and handed to whichever front end is running.

mod auth;
mod history;
mod ledger;
mod seed;

pub use auth::{AuthState, AuthStore};
pub use history::LedgerStore;
pub use ledger::{GoalUpdate, Ledger, NewGoal, NewTransaction};

use crate::config::LedgerConfig;

/// Composition root for the two stores. Nothing else holds session state.
#[derive(Debug)]
pub struct Stores {
    pub auth: AuthStore,
    pub ledger: LedgerStore,
}

impl Stores {
    pub fn new(config: &LedgerConfig) -> Self {
        let initial = if config.seed_demo_data {
            Ledger::seeded()
        } else {
            Ledger::new()
        };
        tracing::debug!(
            transactions = initial.transaction_count(),
            goals = initial.goals().len(),
            "ledger initialised"
        );
        Self {
            auth: AuthStore::new(),
            ledger: LedgerStore::new(initial, config.history_limit),
        }
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod ledger_tests;

#[cfg(test)]
#[path = "ledger_props.rs"]
mod ledger_props;
