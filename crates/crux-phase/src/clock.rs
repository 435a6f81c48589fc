//! Wall-clock abstraction
//!
//! The phase engine never trusts elapsed-time accounting; it re-reads
//! the clock on every wake-up. Injecting the clock keeps the engine
//! testable and tolerant of system clock changes.

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
