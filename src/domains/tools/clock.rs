//! Wall-clock access for time-dependent tools.

use chrono::{Local, NaiveTime};

/// Source of the current local time of day.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

/// Reads the system clock in the process's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Always reports the same time. Used to make time output deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
