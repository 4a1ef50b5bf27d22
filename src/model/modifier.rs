use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::dimension::{Dimension, Dimensions};

/// Largest magnitude a single modifier field may carry in campaign data.
pub const MODIFIER_LIMIT: i32 = 20;

/// Additive deltas contributed by a season or a time period.
///
/// Every field defaults to 0, so partial records in campaign JSON are fine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierRecord {
    pub temperature: i32,
    pub wind: i32,
    pub precipitation: i32,
    pub humidity: i32,
    pub variability: i32,
}

impl ModifierRecord {
    pub const ZERO: ModifierRecord = ModifierRecord {
        temperature: 0,
        wind: 0,
        precipitation: 0,
        humidity: 0,
        variability: 0,
    };

    pub fn get(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::Temperature => self.temperature,
            Dimension::Wind => self.wind,
            Dimension::Precipitation => self.precipitation,
            Dimension::Humidity => self.humidity,
        }
    }

    /// The four dimension deltas, without `variability`.
    pub fn deltas(&self) -> Dimensions<i32> {
        Dimensions::from_fn(|d| self.get(d))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// First field outside `[-MODIFIER_LIMIT, MODIFIER_LIMIT]`, as `(name, value)`.
    pub fn out_of_range_field(&self) -> Option<(&'static str, i32)> {
        Dimension::ALL
            .iter()
            .map(|&d| (d.as_str(), self.get(d)))
            .chain(std::iter::once(("variability", self.variability)))
            .find(|(_, value)| !(-MODIFIER_LIMIT..=MODIFIER_LIMIT).contains(value))
    }
}

impl Add for ModifierRecord {
    type Output = ModifierRecord;

    fn add(self, rhs: ModifierRecord) -> ModifierRecord {
        ModifierRecord {
            temperature: self.temperature.saturating_add(rhs.temperature),
            wind: self.wind.saturating_add(rhs.wind),
            precipitation: self.precipitation.saturating_add(rhs.precipitation),
            humidity: self.humidity.saturating_add(rhs.humidity),
            variability: self.variability.saturating_add(rhs.variability),
        }
    }
}
