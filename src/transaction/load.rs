//! The one-off load of past transactions that runs when the dashboard starts.

use std::{
    sync::{Mutex, Weak},
    time::Duration,
};

use tokio::task::JoinHandle;

use crate::{Error, dashboard::Dashboard, transaction::Transaction};

/// What happened to the result of [spawn_initial_load].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetched transactions replaced the dashboard's transactions.
    Applied,
    /// The fetch failed and the dashboard was left unchanged.
    Failed,
    /// The dashboard was dropped before the fetch finished.
    Discarded,
}

/// Fetch the past transactions.
///
/// Simulates a remote call: resolves with `source` after `delay`. An empty
/// `source` fails straight away without waiting.
///
/// # Errors
/// Returns [Error::NoTransactionData] if `source` is empty.
pub async fn fetch_past_transactions(
    source: Vec<Transaction>,
    delay: Duration,
) -> Result<Vec<Transaction>, Error> {
    if source.is_empty() {
        return Err(Error::NoTransactionData);
    }

    tokio::time::sleep(delay).await;

    Ok(source)
}

/// Spawn the initial load on the Tokio runtime.
///
/// The task only holds a weak reference to the dashboard, so the result is
/// dropped if the dashboard is gone by the time the fetch resolves.
pub fn spawn_initial_load(
    dashboard: Weak<Mutex<Dashboard>>,
    source: Vec<Transaction>,
    delay: Duration,
) -> JoinHandle<LoadOutcome> {
    tokio::spawn(async move {
        let result = fetch_past_transactions(source, delay).await;

        let Some(dashboard) = dashboard.upgrade() else {
            tracing::debug!("dashboard dropped before the initial load finished, discarding result");
            return LoadOutcome::Discarded;
        };

        let Ok(mut dashboard) = dashboard.lock() else {
            tracing::error!("could not acquire dashboard lock to apply the initial load");
            return LoadOutcome::Failed;
        };

        dashboard.apply_initial_load(result)
    })
}
