//! Application router configuration.

use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::{
    AppState, Error,
    budget::{get_budgets_endpoint, put_budgets_endpoint},
    charts::get_daily_series_endpoint,
    dashboard::get_dashboard_endpoint,
    endpoints,
    stores::{BudgetStore, TransactionStore},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
        update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Methods outside each route's method router get a 405 response, unknown
/// paths get a JSON 404.
pub fn build_router<T, B>(state: AppState<T, B>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    B: BudgetStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::ROOT, get(get_service_info))
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint::<T, B>)
                .post(create_transaction_endpoint::<T, B>)
                .put(update_transaction_endpoint::<T, B>)
                .delete(delete_transaction_endpoint::<T, B>),
        )
        .route(
            endpoints::BUDGETS,
            get(get_budgets_endpoint::<T, B>).put(put_budgets_endpoint::<T, B>),
        )
        .route(endpoints::DASHBOARD, get(get_dashboard_endpoint::<T, B>))
        .route(endpoints::DAILY_CHART, get(get_daily_series_endpoint::<T, B>))
        .fallback(get_not_found)
        .with_state(state)
}

/// Identify the service. Doubles as a liveness check.
async fn get_service_info() -> Response {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
    .into_response()
}

/// The JSON 404 response for paths outside the API surface.
async fn get_not_found() -> Response {
    Error::NotFound.into_response()
}

#[cfg(test)]
mod routing_tests {
    use axum::http::StatusCode;
    use serde_json::Value;

    use crate::test_utils::new_test_server;

    #[tokio::test]
    async fn service_info_identifies_the_service() {
        let (server, _budget_dir) = new_test_server();

        let response = server.get("/").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["service"], "outlay");
    }

    #[tokio::test]
    async fn other_methods_on_transactions_are_not_allowed() {
        let (server, _budget_dir) = new_test_server();

        let response = server.patch("/transactions").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unknown_paths_get_a_json_404() {
        let (server, _budget_dir) = new_test_server();

        let response = server.get("/no/such/page").await;

        response.assert_status_not_found();
        let body = response.json::<Value>();
        assert!(body["error"].is_string());
    }
}
