//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Add the tables for the domain models to the database.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL
/// error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL,
                created_at TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transaction', 0)",
        (),
    )?;

    // The list endpoint and the aggregation views always read by date.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;

    Ok(())
}

/// Stores transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SqliteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// The creation timestamp is stamped with the current UTC time.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by
    /// the same thread.
    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "INSERT INTO \"transaction\" (description, amount, category, date, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id, description, amount, category, date, created_at",
            )?
            .query_one(
                (
                    new_transaction.description,
                    new_transaction.amount,
                    new_transaction.category,
                    new_transaction.date,
                    OffsetDateTime::now_utc(),
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve all transactions in the database, most recent date first.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by
    /// the same thread.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, description, amount, category, date, created_at
                 FROM \"transaction\" ORDER BY date DESC",
            )?
            .query_map((), map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    /// Replace the writable fields of the transaction with `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a transaction in the
    ///   database,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by
    /// the same thread.
    fn update(&mut self, id: TransactionId, fields: NewTransaction) -> Result<Transaction, Error> {
        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "UPDATE \"transaction\"
                 SET description = ?1, amount = ?2, category = ?3, date = ?4
                 WHERE id = ?5
                 RETURNING id, description, amount, category, date, created_at",
            )?
            .query_one(
                (
                    fields.description,
                    fields.amount,
                    fields.category,
                    fields.date,
                    id,
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    /// Remove the transaction with `id` from the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a transaction in the
    ///   database,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by
    /// the same thread.
    fn delete(&mut self, id: TransactionId) -> Result<(), Error> {
        let rows_affected = self.connection.lock().unwrap().execute(
            "DELETE FROM \"transaction\" WHERE id = :id",
            &[(":id", &id)],
        )?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}

/// Map a database row to a [Transaction].
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        description: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        date: row.get(4)?,
        created_at: row.get(5)?,
    })
}
