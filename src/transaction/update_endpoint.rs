//! The route handler for updating a transaction.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    AppState, Error,
    stores::{BudgetStore, TransactionStore},
    transaction::{IdQuery, Transaction, TransactionData},
};

/// A route handler for replacing the writable fields of a transaction.
///
/// The transaction is addressed by the `?id=` query parameter. All four
/// fields are replaced wholesale, partial updates are not supported. The
/// creation timestamp is preserved.
pub(crate) async fn update_transaction_endpoint<T, B>(
    State(mut state): State<AppState<T, B>>,
    Query(id_query): Query<IdQuery>,
    Json(data): Json<TransactionData>,
) -> Result<Json<Transaction>, Error>
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    B: BudgetStore + Clone + Send + Sync + 'static,
{
    let id = id_query.transaction_id()?;
    let fields = data.validate()?;

    let transaction = state.transaction_store.update(id, fields)?;

    Ok(Json(transaction))
}

#[cfg(test)]
mod update_endpoint_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{
        category::Category,
        test_utils::new_test_server,
        transaction::Transaction,
    };

    async fn post_test_transaction(server: &TestServer) -> Transaction {
        server
            .post("/transactions")
            .content_type("application/json")
            .json(&json!({
                "description": "Movie night",
                "amount": "18.00",
                "category": "entertainment",
                "date": "2025-05-02",
            }))
            .await
            .json::<Transaction>()
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let (server, _budget_dir) = new_test_server();
        let created = post_test_transaction(&server).await;

        let response = server
            .put(&format!("/transactions?id={}", created.id))
            .content_type("application/json")
            .json(&json!({
                "description": "Movie night with snacks",
                "amount": "27.50",
                "category": "food",
                "date": "2025-05-03",
            }))
            .await;

        response.assert_status_ok();

        let updated = response.json::<Transaction>();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.description, "Movie night with snacks");
        assert_eq!(updated.amount, 27.5);
        assert_eq!(updated.category, Category::Food);
        assert_eq!(updated.date.to_string(), "2025-05-03");
        assert_eq!(updated.created_at, created.created_at);

        let listed = server.get("/transactions").await.json::<Vec<Transaction>>();
        assert_eq!(listed, vec![updated]);
    }

    #[tokio::test]
    async fn update_fails_without_id() {
        let (server, _budget_dir) = new_test_server();
        post_test_transaction(&server).await;

        let response = server
            .put("/transactions")
            .content_type("application/json")
            .json(&json!({
                "description": "Movie night",
                "amount": "18.00",
                "category": "entertainment",
                "date": "2025-05-02",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_fails_on_malformed_id() {
        let (server, _budget_dir) = new_test_server();

        let response = server
            .put("/transactions?id=not-a-number")
            .content_type("application/json")
            .json(&json!({
                "description": "Movie night",
                "amount": "18.00",
                "category": "entertainment",
                "date": "2025-05-02",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_fails_on_missing_transaction() {
        let (server, _budget_dir) = new_test_server();

        let response = server
            .put("/transactions?id=1337")
            .content_type("application/json")
            .json(&json!({
                "description": "Movie night",
                "amount": "18.00",
                "category": "entertainment",
                "date": "2025-05-02",
            }))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn update_fails_on_invalid_fields() {
        let (server, _budget_dir) = new_test_server();
        let created = post_test_transaction(&server).await;

        let response = server
            .put(&format!("/transactions?id={}", created.id))
            .content_type("application/json")
            .json(&json!({
                "description": "Movie night",
                "amount": "-18.00",
                "category": "entertainment",
                "date": "2025-05-02",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
