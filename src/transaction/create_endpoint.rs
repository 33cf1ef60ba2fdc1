//! Defines the endpoint for adding a new transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{dashboard::DashboardState, endpoints, transaction::parse_amount};

/// The form data for adding a transaction.
#[derive(Debug, Deserialize)]
pub struct AddTransactionForm {
    /// The amount as typed by the user.
    #[serde(default)]
    pub amount: String,
}

/// A route handler for adding a new transaction dated now, redirects to the dashboard on success.
pub async fn create_transaction_endpoint(
    State(state): State<DashboardState>,
    Form(form): Form<AddTransactionForm>,
) -> Response {
    let amount = match parse_amount(&form.amount) {
        Ok(amount) => amount,
        Err(error) => {
            tracing::debug!("rejected new transaction: {error}");
            return error.into_alert_response();
        }
    };

    match state.lock() {
        Ok(mut dashboard) => {
            dashboard.append_transaction(amount);
        }
        Err(error) => return error.into_alert_response(),
    }

    (
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
