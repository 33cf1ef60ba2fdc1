//! The endpoint URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The single page showing, filtering and adding transactions.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to list (GET) and add (POST) transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to filter transactions by a date range.
pub const FILTER_TRANSACTIONS_API: &str = "/api/transactions/filter";
