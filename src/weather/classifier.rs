//! Time-of-day classification.
//!
//! Two interchangeable strategies: a fixed hour table, and a table relative to
//! sunrise/sunset. A deployment picks one through `PeriodClassifier`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::TimePeriod;
use crate::model::timestamp::{HOURS_PER_DAY, SECONDS_PER_DAY, SECONDS_PER_HOUR};

// ---------------------------------------------------------------------------
// Fixed-hour table
// ---------------------------------------------------------------------------

/// Half-open hour range `[start, end)`. When `end < start` the range wraps midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
    pub period: TimePeriod,
}

impl HourRange {
    pub const fn new(start: u32, end: u32, period: TimePeriod) -> Self {
        Self { start, end, period }
    }

    pub fn contains(&self, hour: u32) -> bool {
        if self.start <= self.end {
            (self.start..self.end).contains(&hour)
        } else {
            hour >= self.start || hour < self.end
        }
    }
}

/// Hour ranges mapped to periods, with a catch-all for uncovered hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourTable {
    pub ranges: Vec<HourRange>,
    pub fallback: TimePeriod,
}

impl Default for HourTable {
    fn default() -> Self {
        Self {
            ranges: vec![
                HourRange::new(5, 8, TimePeriod::EarlyMorning),
                HourRange::new(8, 12, TimePeriod::Morning),
                HourRange::new(12, 14, TimePeriod::Noon),
                HourRange::new(14, 18, TimePeriod::Afternoon),
                HourRange::new(18, 21, TimePeriod::Evening),
                HourRange::new(21, 2, TimePeriod::Night),
            ],
            fallback: TimePeriod::LateNight,
        }
    }
}

impl HourTable {
    /// First matching range wins; uncovered hours get the fallback.
    pub fn classify(&self, hour: u32) -> TimePeriod {
        let hour = hour % HOURS_PER_DAY as u32;
        self.ranges
            .iter()
            .find(|r| r.contains(hour))
            .map(|r| r.period)
            .unwrap_or(self.fallback)
    }

    /// Reject out-of-day bounds and hours claimed by two ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let day = HOURS_PER_DAY as u32;
        for range in &self.ranges {
            for bound in [range.start, range.end] {
                if bound > day {
                    return Err(ConfigError::HourOutOfRange(bound));
                }
            }
        }
        for hour in 0..day {
            if self.ranges.iter().filter(|r| r.contains(hour)).count() > 1 {
                return Err(ConfigError::OverlappingHourRanges(hour));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sunrise/sunset-relative table
// ---------------------------------------------------------------------------

/// Sun positions for the current day, in seconds since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: u32,
    pub sunset: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midday: Option<u32>,
}

/// Daylight splits into Early Morning (first quarter), Noon (until midday) and
/// Afternoon; night splits into Night and Late Night halves.
pub fn classify_by_sun(second_of_day: u32, sun: &SunTimes) -> TimePeriod {
    let day = SECONDS_PER_DAY as i64;
    let now = i64::from(second_of_day) % day;
    let sunrise = i64::from(sun.sunrise);
    let sunset = i64::from(sun.sunset);

    let daylight = sunset - sunrise;
    let night = day - daylight;
    if daylight <= 0 || night <= 0 {
        return TimePeriod::Unknown;
    }

    if (sunrise..sunset).contains(&now) {
        let quarter = daylight / 4;
        let noon_end = sun
            .midday
            .map(|m| i64::from(m).clamp(sunrise + quarter, sunset))
            .unwrap_or(sunrise + 2 * quarter);
        if now < sunrise + quarter {
            TimePeriod::EarlyMorning
        } else if now < noon_end {
            TimePeriod::Noon
        } else {
            TimePeriod::Afternoon
        }
    } else {
        let since_sunset = (now - sunset).rem_euclid(day);
        if since_sunset < night / 2 {
            TimePeriod::Night
        } else {
            TimePeriod::LateNight
        }
    }
}

// ---------------------------------------------------------------------------
// PeriodClassifier
// ---------------------------------------------------------------------------

/// What a time source can tell the classifier about "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub second_of_day: u32,
    pub sun: Option<SunTimes>,
}

impl ClockReading {
    pub fn at_hour(hour: u32) -> Self {
        Self {
            second_of_day: hour * SECONDS_PER_HOUR as u32,
            sun: None,
        }
    }

    pub fn hour(&self) -> u32 {
        self.second_of_day / SECONDS_PER_HOUR as u32
    }
}

/// The classification strategy chosen for a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodClassifier {
    FixedHours(HourTable),
    /// Uses sun times when the source supplies them, the hour table otherwise.
    SunRelative { fallback: HourTable },
}

impl Default for PeriodClassifier {
    fn default() -> Self {
        PeriodClassifier::FixedHours(HourTable::default())
    }
}

impl PeriodClassifier {
    /// `None` means no time source at all and yields `Unknown Time`.
    pub fn classify(&self, reading: Option<ClockReading>) -> TimePeriod {
        let Some(reading) = reading else {
            return TimePeriod::Unknown;
        };
        match self {
            PeriodClassifier::FixedHours(table) => table.classify(reading.hour()),
            PeriodClassifier::SunRelative { fallback } => match &reading.sun {
                Some(sun) => classify_by_sun(reading.second_of_day, sun),
                None => fallback.classify(reading.hour()),
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            PeriodClassifier::FixedHours(table) => table.validate(),
            PeriodClassifier::SunRelative { fallback } => fallback.validate(),
        }
    }
}
