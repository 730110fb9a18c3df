//! Replays a CSV of deposit/withdraw operations onto one account.
//!
//! Rows are read one at a time and applied in order. A row that cannot be
//! parsed, or an operation the account rejects, is logged at warn level and
//! skipped; the remaining rows are still processed.

use crate::account::Account;
use crate::clock::Clock;
use crate::error::{AccountError, Result};
use crate::money::Money;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Deserialize;
use std::io::Read;

/// Raw operation record as read from CSV.
#[derive(Debug, Deserialize)]
pub struct OperationRecord {
    /// Operation type: deposit, withdraw (or withdrawal)
    #[serde(rename = "type")]
    pub op_type: String,

    /// Amount in major units, e.g. `12.34`
    pub amount: Option<Money>,
}

/// A parsed operation ready to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit(Money),
    Withdraw(Money),
}

impl OperationRecord {
    /// Parses the raw CSV record into a typed operation.
    pub fn parse(&self, row: usize) -> Result<Operation> {
        let op_type = self.op_type.trim().to_lowercase();
        let amount = self.amount.ok_or_else(|| AccountError::InvalidRecord {
            row,
            message: "missing amount".to_string(),
        })?;

        match op_type.as_str() {
            "deposit" => Ok(Operation::Deposit(amount)),
            "withdraw" | "withdrawal" => Ok(Operation::Withdraw(amount)),
            other => Err(AccountError::InvalidRecord {
                row,
                message: format!("unknown operation type {:?}", other),
            }),
        }
    }
}

/// Counts of what happened during a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
}

/// Drives an [`Account`] from a stream of CSV operations.
pub struct Replay<C> {
    account: Account<C>,
}

impl<C: Clock> Replay<C> {
    pub fn new(account: Account<C>) -> Self {
        Replay { account }
    }

    pub fn account(&self) -> &Account<C> {
        &self.account
    }

    pub fn into_account(self) -> Account<C> {
        self.account
    }

    /// Processes operations from a CSV reader in streaming fashion.
    ///
    /// Rows that fail to deserialize or apply, including CSV-level errors,
    /// are counted in the summary instead of being returned.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<ReplaySummary> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut summary = ReplaySummary::default();

        for (row_idx, result) in csv_reader.deserialize::<OperationRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let outcome = result
                .map_err(AccountError::from)
                .and_then(|record| record.parse(row_num))
                .and_then(|op| self.apply(op, row_num));

            match outcome {
                Ok(()) => summary.applied += 1,
                Err(e) => {
                    warn!("Row {}: {}", row_num, e);
                    summary.rejected += 1;
                }
            }
        }

        debug!(
            "Replay finished: {} applied, {} rejected",
            summary.applied, summary.rejected
        );
        Ok(summary)
    }

    /// Applies a single parsed operation.
    pub fn apply(&mut self, op: Operation, row: usize) -> Result<()> {
        let tx = match op {
            Operation::Deposit(amount) => self.account.deposit(amount)?,
            Operation::Withdraw(amount) => self.account.withdraw(amount)?,
        };
        debug!("Row {}: {}", row, tx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use std::io::Cursor;

    fn replay_csv_str(initial: i64, csv: &str) -> (Replay<FixedClock>, ReplaySummary) {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 2, 16, 12, 0, 0).unwrap());
        let account = Account::new(Money::new(initial), clock).unwrap();
        let mut replay = Replay::new(account);
        let summary = replay.process_csv(Cursor::new(csv)).unwrap();
        (replay, summary)
    }

    fn record(op_type: &str, cents: Option<i64>) -> OperationRecord {
        OperationRecord {
            op_type: op_type.to_string(),
            amount: cents.map(Money::new),
        }
    }

    #[test]
    fn test_parse_deposit_and_withdraw() {
        assert_eq!(
            record("deposit", Some(1050)).parse(2).unwrap(),
            Operation::Deposit(Money::new(1050))
        );
        assert_eq!(
            record("  Withdraw ", Some(200)).parse(2).unwrap(),
            Operation::Withdraw(Money::new(200))
        );
        assert_eq!(
            record("withdrawal", Some(1)).parse(2).unwrap(),
            Operation::Withdraw(Money::new(1))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let err = record("dispute", Some(100)).parse(4).unwrap_err();
        assert!(matches!(err, AccountError::InvalidRecord { row: 4, .. }));
    }

    #[test]
    fn test_parse_rejects_missing_amount() {
        assert!(matches!(
            record("deposit", None).parse(2),
            Err(AccountError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_replay_deserializes_amounts_as_money() {
        let csv = r#"type,amount
deposit,12.34
deposit,1.001
deposit,
withdraw,0.34"#;

        let (replay, summary) = replay_csv_str(0, csv);
        assert_eq!(summary, ReplaySummary { applied: 2, rejected: 2 });
        assert_eq!(replay.account().balance(), Money::new(1200));
    }

    #[test]
    fn test_replay_applies_rows_in_order() {
        let csv = r#"type,amount
deposit,5.00
withdraw,2.50
deposit,0.05"#;

        let (replay, summary) = replay_csv_str(1000, csv);
        assert_eq!(summary, ReplaySummary { applied: 3, rejected: 0 });
        assert_eq!(replay.account().balance(), Money::new(1255));
        assert_eq!(
            replay.account().statement_lines(),
            vec![
                "2026-02-16T12:00:00Z DEPOSIT 5.00 -> 15.00",
                "2026-02-16T12:00:00Z WITHDRAW 2.50 -> 12.50",
                "2026-02-16T12:00:00Z DEPOSIT 0.05 -> 12.55",
            ]
        );
    }

    #[test]
    fn test_replay_skips_rejected_rows() {
        let csv = r#"type,amount
withdraw,99.00
deposit,0
deposit,-1
deposit,abc
refund,1.00
deposit,1.00"#;

        let (replay, summary) = replay_csv_str(1000, csv);
        assert_eq!(summary, ReplaySummary { applied: 1, rejected: 5 });
        assert_eq!(replay.account().balance(), Money::new(1100));
        assert_eq!(replay.account().history().len(), 1);
    }

    #[test]
    fn test_replay_handles_whitespace() {
        let csv = r#"type, amount
deposit, 10.00
withdraw,  3.00 "#;

        let (replay, summary) = replay_csv_str(0, csv);
        assert_eq!(summary.applied, 2);
        assert_eq!(replay.into_account().balance(), Money::new(700));
    }
}
