//! Outlay is a web service for tracking personal expenses.
//!
//! This library provides a JSON REST API for recording transactions,
//! managing monthly category budgets, and reading aggregate spending views
//! (dashboard summary and daily chart series) derived from them.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod aggregation;
mod app_state;
mod budget;
mod category;
mod charts;
mod dashboard;
mod endpoints;
mod logging;
mod routing;
mod stores;
#[cfg(test)]
mod test_utils;
mod transaction;

pub use app_state::AppState;
pub use budget::Budgets;
pub use category::Category;
pub use logging::logging_middleware;
pub use routing::build_router;
pub use stores::{
    BudgetStore, JsonBudgetStore, SqliteTransactionStore, TransactionStore, initialize,
};
pub use transaction::{NewTransaction, Transaction, TransactionId};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One or more of the required transaction fields was absent or empty.
    ///
    /// A transaction needs a description, an amount, a category and a date.
    #[error("missing required fields")]
    MissingRequiredFields,

    /// The amount string could not be parsed as a finite number.
    ///
    /// Non-finite amounts are rejected rather than persisted, so a bad
    /// amount never reaches the store.
    #[error("could not parse \"{0}\" as an amount")]
    InvalidAmount(String),

    /// A negative amount was used to create or update a transaction.
    ///
    /// Transactions record spending, so amounts must be zero or greater.
    #[error("the amount {0} is negative, amounts must be zero or greater")]
    NegativeAmount(String),

    /// The category name does not belong to the known category set.
    #[error("\"{0}\" is not a known category")]
    UnknownCategory(String),

    /// The date string could not be parsed as a calendar date.
    #[error("could not parse \"{0}\" as a date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A transaction ID was required but not supplied in the query string.
    #[error("a transaction ID is required")]
    MissingTransactionId,

    /// The supplied transaction ID was not a valid integer.
    #[error("could not parse \"{0}\" as a transaction ID")]
    MalformedTransactionId(String),

    /// The month number for a chart query was outside 1-12.
    #[error("{0} is not a valid month number, expected 1-12")]
    InvalidMonth(u8),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the
    /// parameters (e.g., ID) are correct and that the resource has been
    /// created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// The budget file could not be read or written.
    ///
    /// The message should only be logged on the server, clients receive a
    /// generic error instead.
    #[error("could not access the budget store: {0}")]
    BudgetStoreError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::MissingRequiredFields
            | Error::InvalidAmount(_)
            | Error::NegativeAmount(_)
            | Error::UnknownCategory(_)
            | Error::InvalidDate(_)
            | Error::MissingTransactionId
            | Error::MalformedTransactionId(_)
            | Error::InvalidMonth(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            // Store errors are not intended to be shown to the client.
            Error::SqlError(_) | Error::BudgetStoreError(_) => {
                tracing::error!("An unexpected error occurred: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
