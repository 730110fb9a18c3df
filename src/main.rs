//! Bank account CLI
//!
//! Replays a CSV of deposit/withdraw operations onto a fresh account and
//! prints the resulting statement.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv --initial 10.00 > statement.txt
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use bank_account::{Account, AccountError, Money, Replay, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut input_path = None;
    let mut initial = Money::zero();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--initial" {
            let raw = iter.next().ok_or_else(|| {
                AccountError::InvalidArgument("--initial requires an amount".to_string())
            })?;
            initial = raw.parse()?;
        } else if input_path.is_none() {
            input_path = Some(arg);
        } else {
            return Err(AccountError::InvalidArgument(format!(
                "Unexpected argument {:?}",
                arg
            )));
        }
    }
    let input_path = input_path.ok_or(AccountError::MissingArgument)?;

    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut replay = Replay::new(Account::open(initial)?);
    replay.process_csv(reader)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for line in replay.account().statement_lines() {
        writeln!(handle, "{}", line)?;
    }
    handle.flush()?;

    Ok(())
}
