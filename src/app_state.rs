//! Implements a struct that holds the state of the REST server.

use crate::stores::{BudgetStore, TransactionStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<T, B>
where
    T: TransactionStore + Send + Sync,
    B: BudgetStore + Send + Sync,
{
    /// The store for managing [transactions](crate::transaction::Transaction).
    pub transaction_store: T,

    /// The store for the monthly category [budgets](crate::budget::Budgets).
    pub budget_store: B,
}

impl<T, B> AppState<T, B>
where
    T: TransactionStore + Send + Sync,
    B: BudgetStore + Send + Sync,
{
    /// Create a new [AppState] from the two stores.
    pub fn new(transaction_store: T, budget_store: B) -> Self {
        Self {
            transaction_store,
            budget_store,
        }
    }
}
