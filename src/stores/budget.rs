//! Defines the budget store trait.

use crate::{Error, budget::Budgets};

/// Handles loading and saving the monthly category budget mapping.
pub trait BudgetStore {
    /// Return the last-saved budget mapping, or the default mapping if
    /// none has been saved yet.
    fn load(&self) -> Result<Budgets, Error>;

    /// Overwrite the entire stored budget mapping.
    ///
    /// Implementers must replace the stored mapping wholesale, there is no
    /// partial merge.
    fn save(&mut self, budgets: &Budgets) -> Result<(), Error>;
}
