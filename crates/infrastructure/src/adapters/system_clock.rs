//! Wall-clock adapter for result timestamps

use chrono::{DateTime, Utc};
use pin_probe_application::ports::Clock;

/// Clock reading the system's UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
