//! The route handler for creating a transaction.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    stores::{BudgetStore, TransactionStore},
    transaction::{Transaction, TransactionData},
};

/// A route handler for creating a new transaction.
///
/// Validates the submitted fields, stamps the creation time and responds
/// with 201 and the created record, including the assigned ID.
pub(crate) async fn create_transaction_endpoint<T, B>(
    State(mut state): State<AppState<T, B>>,
    Json(data): Json<TransactionData>,
) -> Result<(StatusCode, Json<Transaction>), Error>
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    B: BudgetStore + Clone + Send + Sync + 'static,
{
    let new_transaction = data.validate()?;

    let transaction = state.transaction_store.create(new_transaction)?;

    Ok((StatusCode::CREATED, Json(transaction)))
}
