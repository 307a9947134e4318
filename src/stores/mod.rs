//! Contains traits and implementations for objects that store the domain
//! models: transactions in SQLite, budgets in a JSON file.

mod budget;
mod json_budget;
mod sqlite;
mod transaction;

pub use budget::BudgetStore;
pub use json_budget::JsonBudgetStore;
pub use sqlite::{SqliteTransactionStore, initialize};
pub use transaction::TransactionStore;
