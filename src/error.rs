//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One or both dates of a date filter were not given.
    #[error("both a start and an end date are required to filter transactions")]
    MissingDateBound,

    /// A date could not be parsed as an ISO `YYYY-MM-DD` date.
    #[error("\"{0}\" is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The text entered for a transaction amount is not a finite number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The fetch for past transactions had no transactions to return.
    #[error("no transaction data")]
    NoTransactionData,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Could not acquire the dashboard lock
    #[error("could not acquire the dashboard lock")]
    DashboardLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::DashboardLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::MissingDateBound => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Please select both dates",
                    "Choose an initial date and an end date to filter transactions.",
                ),
            ),
            Error::InvalidDate(text) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Invalid date",
                    &format!("\"{text}\" is not a valid date. Use the format YYYY-MM-DD."),
                ),
            ),
            Error::InvalidAmount(text) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Invalid transaction amount",
                    &format!("\"{text}\" is not a number. Enter an amount such as 12.50."),
                ),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                ),
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
