//! Defines the endpoint for listing transactions as JSON.

use axum::{Json, extract::State};

use crate::{Error, dashboard::DashboardState, transaction::Transaction};

/// A route handler that returns all transactions in insertion order.
pub async fn list_transactions_endpoint(
    State(state): State<DashboardState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let dashboard = state.lock()?;

    Ok(Json(dashboard.transactions().to_vec()))
}
