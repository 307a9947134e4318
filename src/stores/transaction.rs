//! Defines the transaction store trait.

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Handles the creation, retrieval, update and removal of transactions.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    ///
    /// The store assigns the ID and stamps the creation time.
    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve every transaction in the store, ordered by date descending.
    ///
    /// The order of transactions sharing a date is unspecified, the store
    /// sorts on the date alone.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Replace the description, amount, category and date of the
    /// transaction with `id`. The creation timestamp is preserved.
    fn update(
        &mut self,
        id: TransactionId,
        fields: NewTransaction,
    ) -> Result<Transaction, Error>;

    /// Remove the transaction with `id` from the store.
    fn delete(&mut self, id: TransactionId) -> Result<(), Error>;
}
