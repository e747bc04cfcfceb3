mod amount;
mod goal;
mod transaction;
mod user;

pub use amount::Amount;
pub use goal::{Goal, GoalId};
pub use transaction::{Transaction, TransactionId, TransactionKind};
pub use user::User;
