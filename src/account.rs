//! Account model and operations.
//!
//! Maintains the invariants: the balance is never negative, and it always
//! equals the `balance_after` of the last recorded transaction (or the
//! initial balance when nothing has been recorded).

use crate::clock::{Clock, SystemClock};
use crate::error::{AccountError, Result};
use crate::money::Money;
use crate::transaction::Transaction;
use log::debug;
use std::io::Write;
use std::ops::Deref;

/// A single account: a balance plus an append-only history.
///
/// Every operation validates before it mutates, so a failed deposit or
/// withdrawal leaves both the balance and the history untouched.
///
/// Not internally synchronized. Callers sharing an account across threads
/// must wrap it in a lock.
#[derive(Debug)]
pub struct Account<C = SystemClock> {
    balance: Money,
    transactions: Vec<Transaction>,
    clock: C,
}

impl Account<SystemClock> {
    /// Opens an account stamped by the wall clock.
    pub fn open(initial_balance: Money) -> Result<Self> {
        Account::new(initial_balance, SystemClock)
    }
}

impl<C: Clock> Account<C> {
    /// Creates an account with the given opening balance and time source.
    ///
    /// Fails with [`AccountError::NegativeInitialBalance`] if the balance is
    /// below zero.
    pub fn new(initial_balance: Money, clock: C) -> Result<Self> {
        if initial_balance.is_negative() {
            return Err(AccountError::NegativeInitialBalance { initial_balance });
        }

        Ok(Account {
            balance: initial_balance,
            transactions: Vec::new(),
            clock,
        })
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// A fresh read-only copy of the history, oldest first.
    ///
    /// Later operations on the account are not reflected in a snapshot that
    /// was already handed out.
    pub fn history(&self) -> History {
        History(self.transactions.clone())
    }

    /// One formatted line per transaction, oldest first.
    pub fn statement_lines(&self) -> Vec<String> {
        self.transactions
            .iter()
            .map(Transaction::statement_line)
            .collect()
    }

    /// Deposits funds into the account.
    ///
    /// Fails with [`AccountError::InvalidMoney`] for zero or negative amounts.
    pub fn deposit(&mut self, amount: Money) -> Result<Transaction> {
        validate_amount(amount)?;

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::invalid_money(amount.minor_units(), "amount out of range"))?;
        let tx = Transaction::deposit(amount, self.balance, self.clock.now());
        debug!("Deposited {}, balance now {}", amount, self.balance);

        Ok(self.record(tx))
    }

    /// Withdraws funds from the account.
    ///
    /// Fails with:
    /// - [`AccountError::InvalidMoney`] for zero or negative amounts
    /// - [`AccountError::InsufficientFunds`] if `amount > balance`
    ///
    /// Withdrawing exactly the balance is allowed and leaves zero.
    pub fn withdraw(&mut self, amount: Money) -> Result<Transaction> {
        validate_amount(amount)?;

        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                amount,
                balance: self.balance,
            });
        }

        self.balance -= amount;
        let tx = Transaction::withdraw(amount, self.balance, self.clock.now());
        debug!("Withdrew {}, balance now {}", amount, self.balance);

        Ok(self.record(tx))
    }

    /// Writes the history as CSV with the header `at,kind,amount,balance_after`.
    pub fn write_statement<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        if self.transactions.is_empty() {
            csv_writer.write_record(["at", "kind", "amount", "balance_after"])?;
        }
        for tx in &self.transactions {
            csv_writer.serialize(tx)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    fn record(&mut self, tx: Transaction) -> Transaction {
        self.transactions.push(tx.clone());
        tx
    }

    /// Verifies the balance/history invariants.
    #[cfg(debug_assertions)]
    pub fn check_invariant(&self) -> bool {
        let consistent = self
            .transactions
            .last()
            .map(|tx| tx.balance_after() == self.balance)
            .unwrap_or(true);
        consistent && !self.balance.is_negative()
    }
}

fn validate_amount(amount: Money) -> Result<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(AccountError::invalid_money(
            amount.minor_units(),
            "Amount must be positive",
        ))
    }
}

/// An owned, read-only snapshot of an account's transactions.
///
/// Derefs to a slice, so it supports indexing, `len`, `last` and iteration,
/// but offers no way to push, remove or edit entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct History(Vec<Transaction>);

impl Deref for History {
    type Target = [Transaction];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for History {
    type Item = Transaction;
    type IntoIter = std::vec::IntoIter<Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
