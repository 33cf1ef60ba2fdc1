//! Implements a struct that holds the state of the dashboard server.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio::task::JoinHandle;

use crate::{
    dashboard::Dashboard,
    transaction::{LoadOutcome, Transaction, TransactionStore, seed_transactions, spawn_initial_load},
};

/// The default delay of the simulated fetch for past transactions.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(300);

/// Settings for creating the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// The transactions shown before the initial load finishes.
    pub seed: Vec<Transaction>,
    /// The transactions returned by the initial load.
    ///
    /// The load fails if this is empty.
    pub past_transactions: Vec<Transaction>,
    /// How long the initial load takes to resolve.
    pub fetch_delay: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: seed_transactions(),
            past_transactions: seed_transactions(),
            fetch_delay: DEFAULT_FETCH_DELAY,
        }
    }
}

/// The state of the dashboard server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The dashboard shared by all request handlers.
    pub dashboard: Arc<Mutex<Dashboard>>,
}

impl AppState {
    /// Create a new [AppState] with a dashboard showing the seed transactions in `config`.
    pub fn new(config: &DashboardConfig) -> Self {
        let dashboard = Dashboard::new(TransactionStore::new(config.seed.clone()));

        Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
        }
    }

    /// Start loading past transactions into the dashboard.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start_initial_load(&self, config: &DashboardConfig) -> JoinHandle<LoadOutcome> {
        tracing::debug!(
            "loading past transactions in {}ms",
            config.fetch_delay.as_millis()
        );

        spawn_initial_load(
            Arc::downgrade(&self.dashboard),
            config.past_transactions.clone(),
            config.fetch_delay,
        )
    }
}
