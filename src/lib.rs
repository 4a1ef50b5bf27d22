pub mod error;
pub mod model;
pub mod narrative;
pub mod store;
pub mod time_source;
pub mod weather;

#[cfg(test)]
mod testutil;

pub use error::{ConfigError, GenerationError};
pub use model::{
    CampaignData, Dimension, Dimensions, ModifierRecord, SceneId, Season, Terrain, TimePeriod,
    WeatherState, WorldTime,
};
pub use narrative::DescriptionGenerator;
pub use store::{JsonlStore, MemoryStore, WeatherStateStore};
pub use time_source::{CalendarClock, ManualClock, SystemClock, TimeSource};
pub use weather::{DayForecast, WeatherEngine, WeatherReport, WeatherSettings, WeatherUpdate};
