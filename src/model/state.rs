use std::fmt;

use serde::{Deserialize, Serialize};

use super::dimension::{Dimensions, clamp_level};
use super::terrain::Terrain;
use super::timestamp::WorldTime;

/// Opaque per-scene key used by state stores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The persisted weather of one scene.
///
/// Always replaced wholesale; the engine never patches individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherState {
    pub temperature: i32,
    pub wind: i32,
    pub precipitation: i32,
    pub humidity: i32,
    pub terrain: String,
    pub season: String,
    pub last_update: WorldTime,
}

impl WeatherState {
    /// First state of a scene: terrain baselines, no randomness.
    pub fn seeded(
        terrain_id: impl Into<String>,
        terrain: &Terrain,
        season_id: impl Into<String>,
        now: WorldTime,
    ) -> Self {
        Self::from_values(
            terrain.baselines().map(|_, v| clamp_level(v)),
            terrain_id.into(),
            season_id.into(),
            now,
        )
    }

    pub fn from_values(
        values: Dimensions<i32>,
        terrain: String,
        season: String,
        last_update: WorldTime,
    ) -> Self {
        Self {
            temperature: values.temperature,
            wind: values.wind,
            precipitation: values.precipitation,
            humidity: values.humidity,
            terrain,
            season,
            last_update,
        }
    }

    pub fn values(&self) -> Dimensions<i32> {
        Dimensions::new(self.temperature, self.wind, self.precipitation, self.humidity)
    }
}
