//! Transaction management for the dashboard.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the in-memory `TransactionStore`
//! - Date-range filtering and ISO date parsing/formatting
//! - The initial load of past transactions
//! - Route handlers and HTML views for listing, adding and filtering transactions

mod core;
mod create_endpoint;
mod filter_endpoint;
mod list_endpoint;
mod load;
mod range;
mod view;

pub use core::{
    Transaction, TransactionId, TransactionStore, parse_amount, seed_transactions,
};
pub use create_endpoint::create_transaction_endpoint;
pub use filter_endpoint::filter_transactions_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use load::{LoadOutcome, spawn_initial_load};
pub use range::{DateRange, filter_transactions, format_date, format_iso_date, parse_iso_date};
pub use view::{FILTER_RESULTS_ID, filter_results_view, transaction_list_view};

#[cfg(test)]
pub use view::NO_MATCH_MESSAGE;
