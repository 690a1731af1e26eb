//! Clock port for result timestamps

use chrono::{DateTime, Utc};

/// Port for getting the current time.
///
/// Results are stamped through this trait so tests can pin the time.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
