#[macro_use]
mod macros;

pub mod campaign;
pub mod dimension;
pub mod modifier;
pub mod season;
pub mod state;
pub mod terrain;
pub mod time_period;
pub mod timestamp;

pub use campaign::{CampaignData, DimensionConfig, Rule};
pub use dimension::{DIMENSION_MAX, DIMENSION_MIN, Dimension, Dimensions, clamp_level, clamp_round};
pub use modifier::ModifierRecord;
pub use season::Season;
pub use state::{SceneId, WeatherState};
pub use terrain::Terrain;
pub use time_period::TimePeriod;
pub use timestamp::WorldTime;
