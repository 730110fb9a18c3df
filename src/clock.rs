//! Time sources for stamping transactions.
//!
//! An [`Account`](crate::Account) never reads the system time itself; it asks
//! the [`Clock`] it was built with.

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;

/// Anything that can report the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        FixedClock(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that returns `start`, then advances by `step` on every call.
///
/// Uses a `Cell`, so it is not `Sync`; accounts are single-threaded anyway.
#[derive(Debug, Clone)]
pub struct SteppingClock {
    next: Cell<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        SteppingClock {
            next: Cell::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let current = self.next.get();
        self.next.set(current + self.step);
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_fixed_clock_never_moves() {
        let clock = FixedClock::new(instant());
        assert_eq!(clock.now(), instant());
        assert_eq!(clock.now(), instant());
    }

    #[test]
    fn test_stepping_clock_advances_per_call() {
        let clock = SteppingClock::new(instant(), Duration::seconds(30));
        assert_eq!(clock.now(), instant());
        assert_eq!(clock.now(), instant() + Duration::seconds(30));
        assert_eq!(clock.now(), instant() + Duration::seconds(60));
    }

    #[test]
    fn test_borrowed_clock_delegates() {
        let clock = SteppingClock::new(instant(), Duration::minutes(1));
        let borrowed = &clock;
        assert_eq!(borrowed.now(), instant());
        assert_eq!(clock.now(), instant() + Duration::minutes(1));
    }

    #[test]
    fn test_system_clock_reads_wall_time() {
        assert!(SystemClock.now() > instant() - Duration::days(3650));
    }
}
