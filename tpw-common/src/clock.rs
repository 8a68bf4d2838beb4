//! Clock collaborator
//!
//! The engine never reads system time directly; hosts inject a [`Clock`] so
//! week identification stays deterministic under test.

use chrono::{DateTime, Utc};

/// Source of "now" for week identification
pub trait Clock {
    /// Current UTC timestamp
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed time, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
