use std::fmt;

use serde::{Deserialize, Serialize};

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const MINUTES_PER_HOUR: u64 = 60;
pub const HOURS_PER_DAY: u64 = 24;

pub const SECONDS_PER_HOUR: u64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR; // 3,600
pub const SECONDS_PER_DAY: u64 = SECONDS_PER_HOUR * HOURS_PER_DAY; // 86,400

/// Game-world time as elapsed seconds since the calendar epoch.
///
/// A plain `u64` wrapper. Calendar accessors are derived via division/modulo
/// over a 24-hour day. Natural ordering equals chronological ordering.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WorldTime(u64);

impl WorldTime {
    pub fn from_seconds(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Day index (0-based), hour (0–23) and minute (0–59).
    pub fn new(day: u64, hour: u64, minute: u64) -> Self {
        debug_assert!(hour < HOURS_PER_DAY, "hour out of range: {hour}");
        debug_assert!(minute < MINUTES_PER_HOUR, "minute out of range: {minute}");
        Self(day * SECONDS_PER_DAY + hour * SECONDS_PER_HOUR + minute * SECONDS_PER_MINUTE)
    }

    pub fn as_seconds(self) -> u64 {
        self.0
    }

    /// Whole days since the epoch.
    pub fn day(self) -> u64 {
        self.0 / SECONDS_PER_DAY
    }

    /// Hour of day (0–23).
    pub fn hour(self) -> u32 {
        ((self.0 % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u32
    }

    pub fn minute(self) -> u32 {
        ((self.0 % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u32
    }

    /// Seconds elapsed since midnight (0–86,399).
    pub fn second_of_day(self) -> u32 {
        (self.0 % SECONDS_PER_DAY) as u32
    }

    pub fn plus_hours(self, hours: u64) -> Self {
        Self(self.0.saturating_add(hours * SECONDS_PER_HOUR))
    }

    /// Whole hours elapsed since `earlier`; zero if `earlier` is in the future.
    pub fn hours_since(self, earlier: WorldTime) -> u64 {
        self.0.saturating_sub(earlier.0) / SECONDS_PER_HOUR
    }
}

impl fmt::Display for WorldTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{} {:02}:{:02}", self.day(), self.hour(), self.minute())
    }
}
