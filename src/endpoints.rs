//! The API endpoint URIs.

/// The root route, which identifies the service.
pub const ROOT: &str = "/";
/// The route to access transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to read and replace the monthly category budgets.
pub const BUDGETS: &str = "/budgets";
/// The route for the dashboard summary.
pub const DASHBOARD: &str = "/dashboard";
/// The route for the daily spending chart series.
pub const DAILY_CHART: &str = "/charts/daily";
