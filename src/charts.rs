//! The daily spending chart series endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use time::Month;

use crate::{
    AppState, Error,
    aggregation::{self, DailyTotal},
    stores::{BudgetStore, TransactionStore},
};

/// The month selector for the daily series, e.g. `?year=2024&month=2`.
///
/// `month` is 1-indexed: January is 1, December is 12.
#[derive(Debug, Deserialize)]
pub(crate) struct DailySeriesParams {
    year: i32,
    month: u8,
}

/// A route handler for the daily expense totals of one month.
///
/// The response has one entry per calendar day of the month so the chart's
/// x-axis is dense regardless of transaction presence.
pub(crate) async fn get_daily_series_endpoint<T, B>(
    State(state): State<AppState<T, B>>,
    Query(params): Query<DailySeriesParams>,
) -> Result<Json<Vec<DailyTotal>>, Error>
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    B: BudgetStore + Clone + Send + Sync + 'static,
{
    // The 1-indexed month number from the query becomes a typed month
    // here, at the boundary.
    let month = Month::try_from(params.month).map_err(|_| Error::InvalidMonth(params.month))?;

    let transactions = state.transaction_store.get_all()?;

    Ok(Json(aggregation::daily_series(
        &transactions,
        params.year,
        month,
    )))
}
