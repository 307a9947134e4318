//! The route handler for listing all transactions.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    stores::{BudgetStore, TransactionStore},
    transaction::Transaction,
};

/// A route handler for listing every transaction, most recent date first.
///
/// There is no pagination and no server-side filtering, clients receive
/// the whole collection and derive their views from it.
pub(crate) async fn list_transactions_endpoint<T, B>(
    State(state): State<AppState<T, B>>,
) -> Result<Json<Vec<Transaction>>, Error>
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    B: BudgetStore + Clone + Send + Sync + 'static,
{
    let transactions = state.transaction_store.get_all()?;

    Ok(Json(transactions))
}

#[cfg(test)]
mod list_endpoint_tests {
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{test_utils::new_test_server, transaction::Transaction};

    async fn post_transaction(server: &TestServer, amount: &str, date: &str) {
        server
            .post("/transactions")
            .content_type("application/json")
            .json(&json!({
                "description": "Test",
                "amount": amount,
                "category": "food",
                "date": date,
            }))
            .await
            .assert_status_success();
    }

    #[tokio::test]
    async fn list_is_empty_without_transactions() {
        let (server, _budget_dir) = new_test_server();

        let response = server.get("/transactions").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Transaction>>(), vec![]);
    }

    #[tokio::test]
    async fn list_orders_by_date_descending() {
        let (server, _budget_dir) = new_test_server();
        post_transaction(&server, "1.00", "2025-03-15").await;
        post_transaction(&server, "2.00", "2025-06-01").await;
        post_transaction(&server, "3.00", "2025-01-20").await;

        let response = server.get("/transactions").await;

        response.assert_status_ok();
        let dates: Vec<String> = response
            .json::<Vec<Transaction>>()
            .iter()
            .map(|transaction| transaction.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2025-06-01", "2025-03-15", "2025-01-20"]);
    }

    #[tokio::test]
    async fn created_transaction_round_trips_through_list() {
        let (server, _budget_dir) = new_test_server();

        let created = server
            .post("/transactions")
            .content_type("application/json")
            .json(&json!({
                "description": "Dentist visit",
                "amount": "85.00",
                "category": "healthcare",
                "date": "2025-04-09",
            }))
            .await
            .json::<Transaction>();

        let listed = server.get("/transactions").await.json::<Vec<Transaction>>();

        assert_eq!(listed, vec![created]);
    }
}
