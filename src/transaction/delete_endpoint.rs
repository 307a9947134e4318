//! The route handler for deleting a transaction.

use axum::{
    extract::{Query, State},
    http::StatusCode,
};

use crate::{
    AppState, Error,
    stores::{BudgetStore, TransactionStore},
    transaction::IdQuery,
};

/// A route handler for deleting a transaction addressed by the `?id=`
/// query parameter.
///
/// Responds with 200 and no payload on success.
pub(crate) async fn delete_transaction_endpoint<T, B>(
    State(mut state): State<AppState<T, B>>,
    Query(id_query): Query<IdQuery>,
) -> Result<StatusCode, Error>
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    B: BudgetStore + Clone + Send + Sync + 'static,
{
    let id = id_query.transaction_id()?;

    state.transaction_store.delete(id)?;

    Ok(StatusCode::OK)
}
