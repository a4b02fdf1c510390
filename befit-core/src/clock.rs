//! Time sources for the session.

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Supplies "now" to the session so date bucketing can be controlled in tests.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A manually controlled clock.
///
/// Clones share the same instant, so a test can keep a handle and move time
/// while a session owns another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: Rc<Cell<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, moment: DateTime<Utc>) {
        self.current.set(moment);
    }

    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.current.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_clones_share_time() {
        let start = Utc.with_ymd_and_hms(2025, 3, 9, 8, 0, 0).unwrap();
        let clock = FixedClock::new(start);
        let handle = clock.clone();

        handle.advance(Duration::days(7));

        assert_eq!(clock.now(), start + Duration::days(7));
    }

    #[test]
    fn test_fixed_clock_set() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 9, 8, 0, 0).unwrap());
        let later = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        clock.set(later);

        assert_eq!(clock.now(), later);
    }
}
