//! # Bank Account
//!
//! A single in-memory account with exact money arithmetic and an
//! append-only transaction history.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: amounts are integer minor units (cents)
//! - **No overdrafts**: the balance can never go below zero
//! - **Immutable history**: callers only ever see snapshots
//! - **Injected time**: transactions are stamped by a [`Clock`]
//!
//! ## Example
//!
//! ```
//! use bank_account::{Account, FixedClock, Money};
//! use chrono::{TimeZone, Utc};
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 2, 16, 12, 0, 0).unwrap());
//! let mut account = Account::new(Money::new(1000), clock).unwrap();
//! account.deposit(Money::new(500)).unwrap();
//!
//! assert_eq!(account.balance(), Money::new(1500));
//! assert_eq!(
//!     account.statement_lines(),
//!     vec!["2026-02-16T12:00:00Z DEPOSIT 5.00 -> 15.00"]
//! );
//! ```

pub mod account;
pub mod clock;
pub mod error;
pub mod money;
pub mod replay;
pub mod transaction;

pub use account::{Account, History};
pub use clock::{Clock, FixedClock, SteppingClock, SystemClock};
pub use error::{AccountError, Result};
pub use money::Money;
pub use replay::{Operation, OperationRecord, Replay, ReplaySummary};
pub use transaction::{Transaction, TransactionKind};
