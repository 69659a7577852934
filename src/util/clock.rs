//! Clock abstraction so timestamp fields are deterministic under test

use chrono::{Local, NaiveDateTime};

/// Source of wall-clock time for the commit cycle
pub trait Clock {
    /// Current local date-time
    fn now(&self) -> NaiveDateTime;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant, for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
