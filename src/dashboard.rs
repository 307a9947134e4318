//! The dashboard summary endpoint.
//!
//! Assembles every aggregate view the dashboard page renders into a single
//! response: total spend, the category chart rows, budget comparison,
//! insight messages and the most recent transactions.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::{
    AppState, Error,
    aggregation::{self, BudgetRow, CategoryShare},
    stores::{BudgetStore, TransactionStore},
    transaction::Transaction,
};

/// How many of the most recent transactions the summary includes.
const RECENT_TRANSACTION_COUNT: usize = 5;

/// The aggregate spending view behind the dashboard page.
#[derive(Debug, Serialize)]
pub(crate) struct DashboardSummary {
    /// The sum of all transaction amounts, unrounded.
    total_spend: f64,
    /// Spending per category in first-seen order, for the category chart.
    category_share: Vec<CategoryShare>,
    /// Budget-vs-actual rows in budget mapping order.
    budget_comparison: Vec<BudgetRow>,
    /// Alerts for overspent or nearly depleted budgets.
    insights: Vec<String>,
    /// The most recent transactions by date.
    recent_transactions: Vec<Transaction>,
}

/// A route handler for the dashboard summary.
///
/// Every view is recomputed from a fresh snapshot of the stores on each
/// request, there is no cached derived state.
pub(crate) async fn get_dashboard_endpoint<T, B>(
    State(state): State<AppState<T, B>>,
) -> Result<Json<DashboardSummary>, Error>
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    B: BudgetStore + Clone + Send + Sync + 'static,
{
    let transactions = state.transaction_store.get_all()?;
    let budgets = state.budget_store.load()?;

    let budget_comparison = aggregation::budget_comparison(&transactions, &budgets);
    let insights = aggregation::generate_insights(&budget_comparison);

    Ok(Json(DashboardSummary {
        total_spend: aggregation::total_spend(&transactions),
        category_share: aggregation::category_share(&transactions),
        budget_comparison,
        insights,
        // The list is already sorted by date descending.
        recent_transactions: transactions
            .into_iter()
            .take(RECENT_TRANSACTION_COUNT)
            .collect(),
    }))
}
