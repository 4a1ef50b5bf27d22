use std::path::Path;

use serde::{Deserialize, Serialize};

use super::calculator::MAX_VARIABILITY;
use super::classifier::PeriodClassifier;
use super::forecast::{DEFAULT_FORECAST_DAYS, MAX_FORECAST_DAYS};
use crate::error::ConfigError;
use crate::time_source::TimeSourceKind;

/// World-wide engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSettings {
    /// Random-walk amplitude, 0–10.
    pub variability: i32,
    /// Minimum game hours between automatic updates of a scene.
    pub update_frequency_hours: u64,
    pub forecast_days: u32,
    /// Ask the narrative generator for flavour text.
    pub use_ai_descriptions: bool,
    /// Season used when the time source reports none.
    pub manual_season: Option<String>,
    pub time_source: TimeSourceKind,
    pub classifier: PeriodClassifier,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            variability: 5,
            update_frequency_hours: 6,
            forecast_days: DEFAULT_FORECAST_DAYS,
            use_ai_descriptions: false,
            manual_season: None,
            time_source: TimeSourceKind::default(),
            classifier: PeriodClassifier::default(),
        }
    }
}

impl WeatherSettings {
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let settings: WeatherSettings = serde_json::from_str(input)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=MAX_VARIABILITY).contains(&self.variability) {
            return Err(ConfigError::VariabilityOutOfRange(self.variability));
        }
        if !(1..=MAX_FORECAST_DAYS).contains(&self.forecast_days) {
            return Err(ConfigError::ForecastDaysOutOfRange(self.forecast_days));
        }
        self.classifier.validate()
    }
}
