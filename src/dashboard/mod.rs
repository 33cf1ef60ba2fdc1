//! The dashboard: the state behind the single page and its route handler.
//!
//! [Dashboard] owns the transaction store, the date range the user last
//! filtered by, and the result of that filter. All changes go through its
//! methods, which are called from request handlers and the initial load.

mod page;

pub use page::get_dashboard_page;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;
use time::{Date, macros::date};

use crate::{
    AppState, Error,
    transaction::{DateRange, LoadOutcome, Transaction, TransactionStore, filter_transactions},
};

/// The date both filter inputs show before the user has filtered anything.
pub const DEFAULT_FILTER_DATE: Date = date!(2020 - 10 - 14);

/// The state needed by the dashboard's route handlers.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The dashboard shared by all request handlers.
    pub dashboard: Arc<Mutex<Dashboard>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            dashboard: state.dashboard.clone(),
        }
    }
}

impl DashboardState {
    /// Create the state for a dashboard that is not shared with an [AppState].
    #[cfg(test)]
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
        }
    }

    /// Lock the dashboard for a single change or read.
    ///
    /// # Errors
    /// Returns [Error::DashboardLockError] if the lock is poisoned.
    pub fn lock(&self) -> Result<MutexGuard<'_, Dashboard>, Error> {
        self.dashboard
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire dashboard lock: {error}"))
            .map_err(|_| Error::DashboardLockError)
    }
}

/// The transactions that matched the last date filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult {
    /// The range that was used to filter.
    pub range: DateRange,
    /// The matching transactions in insertion order.
    pub transactions: Vec<Transaction>,
}

/// The state of the dashboard page.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    store: TransactionStore,
    selected_range: DateRange,
    filter_result: Option<FilterResult>,
}

impl Dashboard {
    /// Create a dashboard showing the transactions in `store` with no filter applied.
    pub fn new(store: TransactionStore) -> Self {
        Self {
            store,
            selected_range: DateRange {
                start: DEFAULT_FILTER_DATE,
                end: DEFAULT_FILTER_DATE,
            },
            filter_result: None,
        }
    }

    /// All transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        self.store.list()
    }

    /// The range shown in the filter inputs.
    pub fn selected_range(&self) -> DateRange {
        self.selected_range
    }

    /// The result of the last successful filter, if any.
    pub fn filter_result(&self) -> Option<&FilterResult> {
        self.filter_result.as_ref()
    }

    /// Add a transaction for `amount` dated now.
    pub fn append_transaction(&mut self, amount: f64) -> Transaction {
        let transaction = self.store.append(amount);
        tracing::info!(
            "added transaction {} for {}",
            transaction.id,
            transaction.amount
        );
        transaction
    }

    /// Filter the transactions by the dates chosen by the user.
    ///
    /// On success the result replaces any previous filter result and the
    /// range becomes the selected range. Filters do not build on each other,
    /// every call filters the full list.
    ///
    /// # Errors
    /// Returns [Error::MissingDateBound] if either date is missing, in which
    /// case nothing changes.
    pub fn filter_by_date(
        &mut self,
        start: Option<Date>,
        end: Option<Date>,
    ) -> Result<&FilterResult, Error> {
        let range = DateRange::from_bounds(start, end)?;
        let transactions = filter_transactions(self.store.list(), range);

        tracing::debug!(
            "{} of {} transactions between {} and {}",
            transactions.len(),
            self.store.len(),
            range.start,
            range.end
        );

        self.selected_range = range;

        Ok(self
            .filter_result
            .insert(FilterResult {
                range,
                transactions,
            }))
    }

    /// Apply the result of the initial load.
    ///
    /// Fetched transactions replace the current ones wholesale. A failed
    /// fetch is logged and the current transactions stay as they are.
    pub fn apply_initial_load(&mut self, result: Result<Vec<Transaction>, Error>) -> LoadOutcome {
        match result {
            Ok(transactions) => {
                tracing::info!("loaded {} past transactions", transactions.len());
                self.store.replace_all(transactions);
                LoadOutcome::Applied
            }
            Err(error) => {
                tracing::warn!("could not load past transactions, keeping seed data: {error}");
                LoadOutcome::Failed
            }
        }
    }
}
