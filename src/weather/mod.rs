//! Weather evolution, classification, description and forecasting.

pub mod calculator;
pub mod classifier;
pub mod describe;
pub mod engine;
pub mod forecast;
pub mod settings;

pub use calculator::{CalculationTrace, MAX_VARIABILITY, WeatherInputs, calculate};
pub use classifier::{ClockReading, HourRange, HourTable, PeriodClassifier, SunTimes};
pub use describe::{ConditionsSummary, WeatherReport, active_effects, bucketize, describe};
pub use engine::{WeatherEngine, WeatherUpdate, is_update_due};
pub use forecast::{DEFAULT_FORECAST_DAYS, DayForecast, MAX_FORECAST_DAYS, project};
pub use settings::WeatherSettings;
