//! Clock port for reading the current Earth time.
//!
//! The domain never calls `Utc::now()` itself. Callers inject a clock so
//! that "now" is testable; the clock binary provides the system adapter.

use chrono::{DateTime, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Fixed clock, always returning the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
