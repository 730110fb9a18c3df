//! Transaction records produced by account operations.

use crate::money::Money;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Kind of balance change a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    /// Credit funds to the account.
    Deposit,

    /// Debit funds from the account.
    Withdraw,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("DEPOSIT"),
            TransactionKind::Withdraw => f.write_str("WITHDRAW"),
        }
    }
}

/// A completed deposit or withdrawal.
///
/// Only [`Account`](crate::Account) builds these, after it has validated the
/// operation, so the fields are read-only from outside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// When the operation was applied.
    #[serde(serialize_with = "serialize_timestamp")]
    at: DateTime<Utc>,

    kind: TransactionKind,

    /// Always positive.
    amount: Money,

    /// Account balance immediately after this operation.
    balance_after: Money,
}

impl Transaction {
    pub(crate) fn deposit(amount: Money, balance_after: Money, at: DateTime<Utc>) -> Self {
        Transaction {
            at,
            kind: TransactionKind::Deposit,
            amount,
            balance_after,
        }
    }

    pub(crate) fn withdraw(amount: Money, balance_after: Money, at: DateTime<Utc>) -> Self {
        Transaction {
            at,
            kind: TransactionKind::Withdraw,
            amount,
            balance_after,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn balance_after(&self) -> Money {
        self.balance_after
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }

    /// Renders the transaction as one statement line:
    /// `<timestamp> <KIND> <amount> -> <balance after>`.
    pub fn statement_line(&self) -> String {
        format!(
            "{} {} {} -> {}",
            format_timestamp(&self.at),
            self.kind,
            self.amount,
            self.balance_after
        )
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.statement_line())
    }
}

/// ISO-8601 in UTC at second precision with a `Z` suffix.
fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn serialize_timestamp<S>(at: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(at))
}
