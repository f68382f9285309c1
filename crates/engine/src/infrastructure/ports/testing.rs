//! Testability ports for injecting time and randomness.

use chrono::{DateTime, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of battle damage variance. Injectable and seedable so battles are
/// reproducible in tests.
pub trait RandomPort: Send + Sync {
    /// Uniform integer in `[min, max]`, both ends inclusive.
    fn gen_range(&self, min: i32, max: i32) -> i32;
}
