//! Where "now", the time of day and the season come from.
//!
//! A deployment picks one `TimeSource` at startup (`build_time_source`); the engine never
//! branches on which calendar is active.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::model::{TimePeriod, WorldTime};
use crate::weather::classifier::{ClockReading, PeriodClassifier, SunTimes};

/// Everything one engine operation needs from a source, read at a single instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeReading {
    pub now: WorldTime,
    pub clock: Option<ClockReading>,
    pub season: Option<String>,
}

impl TimeReading {
    pub fn time_period(&self, classifier: &PeriodClassifier) -> TimePeriod {
        classifier.classify(self.clock)
    }
}

pub trait TimeSource {
    /// Timestamp recorded as `lastUpdate`.
    fn now(&self) -> WorldTime;

    /// Time of day, or `None` when the source cannot tell.
    fn clock(&self) -> Option<ClockReading>;

    /// Season name or id as reported by the source.
    fn current_season(&self) -> Option<String>;

    fn current_hour(&self) -> Option<u32> {
        self.clock().map(|c| c.hour())
    }

    fn current_time_period(&self, classifier: &PeriodClassifier) -> TimePeriod {
        classifier.classify(self.clock())
    }

    /// Time, clock and season together. Sources backed by a changing feed override this
    /// to read the feed once.
    fn reading(&self) -> TimeReading {
        TimeReading {
            now: self.now(),
            clock: self.clock(),
            season: self.current_season(),
        }
    }
}

// ---------------------------------------------------------------------------
// SystemClock
// ---------------------------------------------------------------------------

/// Wall-clock fallback when no calendar is available. Reports no season, so the
/// engine uses the manually configured one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> WorldTime {
        let secs = chrono::Utc::now().timestamp().max(0) as u64;
        WorldTime::from_seconds(secs)
    }

    fn clock(&self) -> Option<ClockReading> {
        Some(ClockReading {
            second_of_day: chrono::Local::now().num_seconds_from_midnight(),
            sun: None,
        })
    }

    fn current_season(&self) -> Option<String> {
        None
    }
}

// ---------------------------------------------------------------------------
// CalendarClock
// ---------------------------------------------------------------------------

/// What a calendar integration reports at a given moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSnapshot {
    pub world_time: WorldTime,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub sun: Option<SunTimes>,
}

/// Host-side calendar integration. `None` means the calendar is not active right now.
pub trait CalendarFeed {
    fn snapshot(&self) -> Option<CalendarSnapshot>;
}

impl<F> CalendarFeed for F
where
    F: Fn() -> Option<CalendarSnapshot>,
{
    fn snapshot(&self) -> Option<CalendarSnapshot> {
        self()
    }
}

/// Game-world time, time of day and season from a calendar integration.
pub struct CalendarClock {
    feed: Box<dyn CalendarFeed>,
}

impl CalendarClock {
    pub fn new(feed: Box<dyn CalendarFeed>) -> Self {
        Self { feed }
    }
}

impl TimeSource for CalendarClock {
    fn now(&self) -> WorldTime {
        self.reading().now
    }

    fn clock(&self) -> Option<ClockReading> {
        self.reading().clock
    }

    fn current_season(&self) -> Option<String> {
        self.reading().season
    }

    fn reading(&self) -> TimeReading {
        let Some(snapshot) = self.feed.snapshot() else {
            return TimeReading::default();
        };
        TimeReading {
            now: snapshot.world_time,
            clock: Some(ClockReading {
                second_of_day: snapshot.world_time.second_of_day(),
                sun: snapshot.sun,
            }),
            season: snapshot.season,
        }
    }
}

// ---------------------------------------------------------------------------
// ManualClock
// ---------------------------------------------------------------------------

/// Game time advanced explicitly by the host (or by tests and demos).
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    pub time: WorldTime,
    pub season: Option<String>,
    pub sun: Option<SunTimes>,
}

impl ManualClock {
    pub fn new(time: WorldTime, season: Option<String>) -> Self {
        Self {
            time,
            season,
            sun: None,
        }
    }

    pub fn advance_hours(&mut self, hours: u64) {
        self.time = self.time.plus_hours(hours);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> WorldTime {
        self.time
    }

    fn clock(&self) -> Option<ClockReading> {
        Some(ClockReading {
            second_of_day: self.time.second_of_day(),
            sun: self.sun,
        })
    }

    fn current_season(&self) -> Option<String> {
        self.season.clone()
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSourceKind {
    #[default]
    SystemClock,
    Calendar,
}

/// Build the configured source. A calendar kind without a feed degrades to the wall clock.
pub fn build_time_source(
    kind: TimeSourceKind,
    feed: Option<Box<dyn CalendarFeed>>,
) -> Box<dyn TimeSource> {
    match (kind, feed) {
        (TimeSourceKind::Calendar, Some(feed)) => Box::new(CalendarClock::new(feed)),
        (TimeSourceKind::Calendar, None) => {
            tracing::warn!("calendar time source selected but no calendar feed; using wall clock");
            Box::new(SystemClock)
        }
        (TimeSourceKind::SystemClock, _) => Box::new(SystemClock),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::model::timestamp::SECONDS_PER_HOUR;

    fn snapshot(hour: u64, season: Option<&str>) -> CalendarSnapshot {
        CalendarSnapshot {
            world_time: WorldTime::new(10, hour, 0),
            season: season.map(str::to_string),
            sun: None,
        }
    }

    #[test]
    fn calendar_clock_reads_feed() {
        let clock = CalendarClock::new(Box::new(|| Some(snapshot(15, Some("Autumn")))));
        assert_eq!(clock.now(), WorldTime::new(10, 15, 0));
        assert_eq!(clock.current_hour(), Some(15));
        assert_eq!(clock.current_season().as_deref(), Some("Autumn"));
        assert_eq!(
            clock.current_time_period(&PeriodClassifier::default()),
            TimePeriod::Afternoon
        );
    }

    #[test]
    fn calendar_reading_takes_one_snapshot() {
        let calls = Rc::new(Cell::new(0u64));
        let counter = Rc::clone(&calls);
        let clock = CalendarClock::new(Box::new(move || {
            counter.set(counter.get() + 1);
            let season = if counter.get() % 2 == 0 { "Winter" } else { "Summer" };
            Some(snapshot(counter.get(), Some(season)))
        }));

        let reading = clock.reading();
        assert_eq!(calls.get(), 1);
        assert_eq!(reading.now, WorldTime::new(10, 1, 0));
        assert_eq!(reading.clock.map(|c| c.hour()), Some(1));
        assert_eq!(reading.season.as_deref(), Some("Summer"));
        assert_eq!(
            reading.time_period(&PeriodClassifier::default()),
            TimePeriod::Night
        );
    }

    #[test]
    fn manual_reading_matches_accessors() {
        let clock = ManualClock::new(WorldTime::new(2, 13, 30), Some("spring".to_string()));
        let reading = clock.reading();
        assert_eq!(reading.now, clock.now());
        assert_eq!(reading.clock, clock.clock());
        assert_eq!(reading.season, clock.current_season());
    }

    #[test]
    fn calendar_without_season_reports_none() {
        let clock = CalendarClock::new(Box::new(|| Some(snapshot(3, None))));
        assert_eq!(clock.current_season(), None);
        assert_eq!(clock.current_hour(), Some(3));
    }

    #[test]
    fn inactive_calendar_is_unknown_time() {
        let clock = CalendarClock::new(Box::new(|| None));
        assert_eq!(clock.clock(), None);
        assert_eq!(clock.current_hour(), None);
        assert_eq!(
            clock.current_time_period(&PeriodClassifier::default()),
            TimePeriod::Unknown
        );
    }

    #[test]
    fn calendar_sun_times_reach_classifier() {
        let sun = SunTimes {
            sunrise: 7 * SECONDS_PER_HOUR as u32,
            sunset: 17 * SECONDS_PER_HOUR as u32,
            midday: None,
        };
        let clock = CalendarClock::new(Box::new(move || {
            Some(CalendarSnapshot {
                sun: Some(sun),
                ..snapshot(18, None)
            })
        }));
        let classifier = PeriodClassifier::SunRelative {
            fallback: Default::default(),
        };
        assert_eq!(clock.current_time_period(&classifier), TimePeriod::Night);
    }

    #[test]
    fn manual_clock_advances() {
        let mut clock = ManualClock::new(WorldTime::new(0, 22, 0), None);
        clock.advance_hours(5);
        assert_eq!(clock.now(), WorldTime::new(1, 3, 0));
        assert_eq!(
            clock.current_time_period(&PeriodClassifier::default()),
            TimePeriod::LateNight
        );
    }

    #[test]
    fn system_clock_always_knows_the_hour() {
        let clock = SystemClock;
        let hour = clock.current_hour().unwrap();
        assert!(hour < 24);
        assert_eq!(clock.current_season(), None);
        assert!(clock.now().as_seconds() > 0);
    }

    #[test]
    fn calendar_kind_without_feed_falls_back() {
        let source = build_time_source(TimeSourceKind::Calendar, None);
        assert!(source.clock().is_some());
    }

    #[test]
    fn kind_serde_names() {
        assert_eq!(
            serde_json::to_string(&TimeSourceKind::Calendar).unwrap(),
            "\"calendar\""
        );
    }
}
