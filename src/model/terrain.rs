use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::dimension::Dimensions;
use super::modifier::ModifierRecord;
use super::time_period::TimePeriod;

/// Reference data for one terrain type: baselines plus optional per-period modifiers.
///
/// Loaded from campaign data and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Terrain {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub temperature: i32,
    pub wind: i32,
    pub precipitation: i32,
    pub humidity: i32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub time_modifiers: BTreeMap<TimePeriod, ModifierRecord>,
    /// Narrative survival rules shown alongside the weather report.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
}

impl Terrain {
    pub fn baselines(&self) -> Dimensions<i32> {
        Dimensions::new(self.temperature, self.wind, self.precipitation, self.humidity)
    }

    /// Terrain-specific modifier for `period`, zero when absent.
    pub fn time_modifier(&self, period: TimePeriod) -> ModifierRecord {
        self.time_modifiers
            .get(&period)
            .copied()
            .unwrap_or(ModifierRecord::ZERO)
    }

    /// Identifier derived from the display name: lowercase, words joined by `-`.
    pub fn derived_id(&self) -> String {
        self.name
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}
