//! Helper functions for testing the API endpoints.

use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use rusqlite::Connection;
use tempfile::TempDir;

use crate::{AppState, JsonBudgetStore, SqliteTransactionStore, build_router, initialize};

/// Create a test server over an in-memory database and a budget file in a
/// fresh temp directory.
///
/// The returned [TempDir] must be kept alive for as long as the server is
/// in use, dropping it deletes the budget file's directory.
pub(crate) fn new_test_server() -> (TestServer, TempDir) {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");
    initialize(&connection).expect("Could not initialize database.");

    let budget_dir = TempDir::new().expect("Could not create temp dir.");
    let state = AppState::new(
        SqliteTransactionStore::new(Arc::new(Mutex::new(connection))),
        JsonBudgetStore::new(budget_dir.path().join("budgets.json")),
    );

    let server = TestServer::new(build_router(state));

    (server, budget_dir)
}
