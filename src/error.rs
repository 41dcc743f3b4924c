//! Error types for the banking ledger.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur during ledger operation.
///
/// Every domain variant is a recoverable, reported outcome: the account
/// state is unchanged whenever one is returned.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to read from or write to the session streams
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Deposit or withdrawal amount was not positive, or an account was
    /// opened with a negative initial balance
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    /// Withdrawal exceeded the available balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// Amount the caller asked to withdraw
        requested: Money,
        /// Balance at the time of the request
        available: Money,
    },

    /// No account carries the given number
    #[error("Account {0} not found")]
    AccountNotFound(u32),
}
