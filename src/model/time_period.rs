use serde::{Deserialize, Serialize};

/// Named bucket of the day driving time-of-day modifiers.
///
/// The display strings double as the keys of `timeModifiers` tables in campaign data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TimePeriod {
    EarlyMorning,
    Morning,
    Noon,
    Afternoon,
    Evening,
    Night,
    LateNight,
    /// No usable time information. Applies zero modifiers.
    Unknown,
}

string_enum!(TimePeriod {
    EarlyMorning => "Early Morning",
    Morning => "Morning",
    Noon => "Noon",
    Afternoon => "Afternoon",
    Evening => "Evening",
    Night => "Night",
    LateNight => "Late Night",
    Unknown => "Unknown Time",
});

impl TimePeriod {
    pub fn is_known(self) -> bool {
        self != TimePeriod::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &period in TimePeriod::ALL {
            assert_eq!(period.as_str().parse::<TimePeriod>(), Ok(period));
        }
    }

    #[test]
    fn unknown_is_sentinel() {
        assert!(!TimePeriod::Unknown.is_known());
        assert!(TimePeriod::LateNight.is_known());
        assert_eq!(TimePeriod::Unknown.to_string(), "Unknown Time");
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&TimePeriod::EarlyMorning).unwrap();
        assert_eq!(json, "\"Early Morning\"");
        let parsed: TimePeriod = serde_json::from_str("\"Late Night\"").unwrap();
        assert_eq!(parsed, TimePeriod::LateNight);
    }
}
