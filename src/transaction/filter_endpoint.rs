//! Defines the endpoint for filtering transactions by date.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::html;
use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    alert::clear_alerts,
    dashboard::DashboardState,
    transaction::{filter_results_view, parse_iso_date},
};

/// The form data for the date filter.
///
/// A bound is `None` when the date input was left empty.
#[derive(Debug, Default, Deserialize)]
pub struct FilterForm {
    /// The initial date as `YYYY-MM-DD`.
    #[serde(default)]
    pub start: Option<String>,
    /// The end date as `YYYY-MM-DD`.
    #[serde(default)]
    pub end: Option<String>,
}

fn parse_bound(text: Option<&str>) -> Result<Option<Date>, Error> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_iso_date(text).map(Some),
    }
}

impl FilterForm {
    fn parse_bounds(&self) -> Result<(Option<Date>, Option<Date>), Error> {
        let start = parse_bound(self.start.as_deref())?;
        let end = parse_bound(self.end.as_deref())?;

        Ok((start, end))
    }
}

/// A route handler for filtering the transactions by date.
///
/// Responds with the filter results section, which replaces the previous one
/// on the page, and clears any alert left by an earlier request. Validation
/// errors are returned as an alert and leave the last result in place.
pub async fn filter_transactions_endpoint(
    State(state): State<DashboardState>,
    Form(form): Form<FilterForm>,
) -> Response {
    let (start, end) = match form.parse_bounds() {
        Ok(bounds) => bounds,
        Err(error) => return error.into_alert_response(),
    };

    let mut dashboard = match state.lock() {
        Ok(dashboard) => dashboard,
        Err(error) => return error.into_alert_response(),
    };

    match dashboard.filter_by_date(start, end) {
        Ok(result) => html! {
            (filter_results_view(Some(result)))
            (clear_alerts())
        }
        .into_response(),
        Err(error) => {
            tracing::debug!("rejected date filter: {error}");
            error.into_alert_response()
        }
    }
}
