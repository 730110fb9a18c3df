//! Error types for account operations.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for account operations
pub type Result<T> = std::result::Result<T, AccountError>;

/// Errors that can occur while building money values or operating an account.
///
/// Every domain variant is a local validation failure: nothing is retried and
/// no state has been touched by the time one is returned.
#[derive(Error, Debug)]
pub enum AccountError {
    /// Input that cannot be an integer count of minor units, or a
    /// non-positive amount handed to deposit/withdraw
    #[error("Invalid money value {value:?}: {reason}")]
    InvalidMoney { value: String, reason: String },

    /// Account opened below zero
    #[error("Initial balance cannot be negative. Got: {initial_balance}")]
    NegativeInitialBalance { initial_balance: Money },

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds: tried to withdraw {amount}, balance is {balance}")]
    InsufficientFunds { amount: Money, balance: Money },

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid operation record
    #[error("Invalid operation at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: bank-account <operations.csv> [--initial <amount>]")]
    MissingArgument,

    /// Malformed command-line arguments
    #[error("{0}. Usage: bank-account <operations.csv> [--initial <amount>]")]
    InvalidArgument(String),
}

impl AccountError {
    pub(crate) fn invalid_money(value: impl ToString, reason: impl Into<String>) -> Self {
        AccountError::InvalidMoney {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
