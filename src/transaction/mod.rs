//! The transaction domain type and the REST endpoints for creating,
//! listing, updating and deleting transactions.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod id_query;
mod list_endpoint;
mod update_endpoint;

pub use core::{NewTransaction, Transaction, TransactionId};
pub(crate) use core::TransactionData;
pub(crate) use create_endpoint::create_transaction_endpoint;
pub(crate) use delete_endpoint::delete_transaction_endpoint;
pub(crate) use id_query::IdQuery;
pub(crate) use list_endpoint::list_transactions_endpoint;
pub(crate) use update_endpoint::update_transaction_endpoint;
