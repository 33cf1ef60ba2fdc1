//! Defines the core data model for transactions and the in-memory store that owns them.

use serde::Serialize;
use time::{OffsetDateTime, macros::datetime};

use crate::Error;

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

// ============================================================================
// MODELS
// ============================================================================

/// A payment event, i.e. money that was spent or received at a point in time.
///
/// Transactions are created by [TransactionStore::append] or come from the
/// seed data, and are never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// The ID of the transaction.
    ///
    /// IDs are derived from the length of the list when the transaction is
    /// created, so they are only unique while nothing is removed from the list.
    pub id: TransactionId,
    /// The amount of money in this transaction.
    pub amount: f64,
    /// When the transaction happened, in UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// The transactions shown before (or without) a successful initial load.
pub fn seed_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            amount: 10.0,
            date: datetime!(2020-10-14 0:00 UTC),
        },
        Transaction {
            id: 2,
            amount: 20.0,
            date: datetime!(2019-10-14 0:00 UTC),
        },
        Transaction {
            id: 3,
            amount: 30.0,
            date: datetime!(2018-10-14 0:00 UTC),
        },
    ]
}

/// Parse the free text from the amount input into a transaction amount.
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
/// Returns [Error::InvalidAmount] if `text` is empty, is not a number, or is
/// not finite (e.g. "NaN" or "inf").
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    let trimmed = text.trim();

    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}

// ============================================================================
// STORE
// ============================================================================

/// The ordered list of transactions.
///
/// The list can only be read through [TransactionStore::list] and changed
/// through [TransactionStore::append] and [TransactionStore::replace_all], so
/// insertion order and ID assignment stay under the store's control.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create a store holding `transactions` in the given order.
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Create a store holding the [seed_transactions].
    pub fn seeded() -> Self {
        Self::new(seed_transactions())
    }

    /// Append a transaction for `amount` dated now.
    pub fn append(&mut self, amount: f64) -> Transaction {
        self.append_at(amount, OffsetDateTime::now_utc())
    }

    /// Append a transaction for `amount` dated `date`.
    ///
    /// The new transaction's ID is the number of transactions before the
    /// append plus one.
    pub fn append_at(&mut self, amount: f64, date: OffsetDateTime) -> Transaction {
        let transaction = Transaction {
            id: self.transactions.len() as TransactionId + 1,
            amount,
            date,
        };

        self.transactions.push(transaction.clone());

        transaction
    }

    /// All transactions in insertion order.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Replace the entire list with `transactions`.
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
