//! Time source abstraction.
//!
//! Commands like `date`, `uptime`, and `cal` are pure functions of the
//! injected clock, so tests can pin a timestamp instead of sleeping or
//! matching against wall-clock output.

use chrono::{DateTime, Local, TimeZone};

/// Supplies the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to one instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// Pins the clock to the given local date and time.
    ///
    /// Panics if the values do not form a valid timestamp; intended for
    /// test fixtures only.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        Self(
            Local
                .with_ymd_and_hms(year, month, day, hour, min, sec)
                .single()
                .expect("valid fixed timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
