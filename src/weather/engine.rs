//! Scene-level orchestration: resolve reference data, decide when to update, persist.

use rand::RngCore;

use super::calculator::{CalculationTrace, WeatherInputs, calculate};
use super::describe::{ConditionsSummary, WeatherReport, active_effects, describe};
use super::forecast::{DayForecast, project};
use super::settings::WeatherSettings;
use crate::error::ConfigError;
use crate::model::{CampaignData, SceneId, Terrain, TimePeriod, WeatherState, WorldTime};
use crate::narrative::{DescriptionGenerator, narrate};
use crate::store::WeatherStateStore;
use crate::time_source::{TimeReading, TimeSource};

/// Result of one recalculation.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherUpdate {
    pub state: WeatherState,
    pub trace: CalculationTrace,
}

/// True once at least `frequency_hours` of game time have passed since `last_update`.
pub fn is_update_due(last_update: WorldTime, now: WorldTime, frequency_hours: u64) -> bool {
    now.hours_since(last_update) >= frequency_hours
}

/// Owns validated campaign data and settings; all scene state lives in the store.
#[derive(Debug, Clone)]
pub struct WeatherEngine {
    campaign: CampaignData,
    settings: WeatherSettings,
}

impl WeatherEngine {
    pub fn new(campaign: CampaignData, settings: WeatherSettings) -> Result<Self, ConfigError> {
        campaign.validate()?;
        settings.validate()?;
        Ok(Self { campaign, settings })
    }

    pub fn campaign(&self) -> &CampaignData {
        &self.campaign
    }

    pub fn settings(&self) -> &WeatherSettings {
        &self.settings
    }

    pub fn set_variability(&mut self, variability: i32) -> Result<(), ConfigError> {
        let settings = WeatherSettings {
            variability,
            ..self.settings.clone()
        };
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Scene lifecycle
    // -----------------------------------------------------------------------

    /// Seed a scene from terrain baselines. Unknown or missing terrain uses the fallback.
    pub fn initialize_scene(
        &self,
        store: &mut dyn WeatherStateStore,
        scene: &SceneId,
        terrain_id: Option<&str>,
        time: &dyn TimeSource,
    ) -> WeatherState {
        self.seed_scene(store, scene, terrain_id, &time.reading())
    }

    fn seed_scene(
        &self,
        store: &mut dyn WeatherStateStore,
        scene: &SceneId,
        terrain_id: Option<&str>,
        reading: &TimeReading,
    ) -> WeatherState {
        let (terrain_id, terrain) = self.resolve_terrain(terrain_id);
        let season = self.resolve_season(reading, None);
        let state = WeatherState::seeded(terrain_id, terrain, season, reading.now);
        tracing::info!(%scene, terrain = terrain_id, season = %state.season, "initialized scene weather");
        store.put(scene, state.clone());
        state
    }

    /// Recalculate a scene if enough game time has passed, or unconditionally when `force`.
    ///
    /// A scene without state is seeded first; it is only recalculated in the same call
    /// when forced. Returns `None` when nothing was recalculated.
    pub fn update_scene(
        &self,
        store: &mut dyn WeatherStateStore,
        scene: &SceneId,
        time: &dyn TimeSource,
        rng: &mut dyn RngCore,
        force: bool,
    ) -> Option<WeatherUpdate> {
        let reading = time.reading();
        let previous = match store.get(scene) {
            Some(state) => state,
            None => self.seed_scene(store, scene, None, &reading),
        };
        let now = reading.now;
        if !force && !is_update_due(previous.last_update, now, self.settings.update_frequency_hours)
        {
            tracing::debug!(
                %scene,
                last_update = %previous.last_update,
                %now,
                "weather update not due"
            );
            return None;
        }
        Some(self.recalculate(store, scene, previous, &reading, rng))
    }

    /// Move a scene to another terrain and recalculate immediately.
    pub fn set_terrain(
        &self,
        store: &mut dyn WeatherStateStore,
        scene: &SceneId,
        terrain_id: &str,
        time: &dyn TimeSource,
        rng: &mut dyn RngCore,
    ) -> Result<WeatherUpdate, ConfigError> {
        let terrain = self
            .campaign
            .terrain(terrain_id)
            .ok_or_else(|| ConfigError::UnknownTerrain(terrain_id.to_string()))?;
        let reading = time.reading();
        let previous = match store.get(scene) {
            Some(state) => WeatherState {
                terrain: terrain_id.to_string(),
                ..state
            },
            None => {
                let season = self.resolve_season(&reading, None);
                WeatherState::seeded(terrain_id, terrain, season, reading.now)
            }
        };
        tracing::info!(%scene, terrain = terrain_id, "scene terrain changed");
        Ok(self.recalculate(store, scene, previous, &reading, rng))
    }

    /// Set the manual season (by id or display name) and recalculate the scene.
    ///
    /// A season reported by a calendar still takes precedence on later updates.
    pub fn set_season(
        &mut self,
        store: &mut dyn WeatherStateStore,
        scene: &SceneId,
        season: &str,
        time: &dyn TimeSource,
        rng: &mut dyn RngCore,
    ) -> Result<WeatherUpdate, ConfigError> {
        let season_id = self
            .campaign
            .find_season_id(season)
            .ok_or_else(|| ConfigError::UnknownSeason(season.to_string()))?
            .to_string();
        self.settings.manual_season = Some(season_id.clone());
        let reading = time.reading();
        let previous = match store.get(scene) {
            Some(state) => state,
            None => self.seed_scene(store, scene, None, &reading),
        };
        tracing::info!(%scene, season = %season_id, "manual season changed");
        Ok(self.recalculate(store, scene, previous, &reading, rng))
    }

    fn recalculate(
        &self,
        store: &mut dyn WeatherStateStore,
        scene: &SceneId,
        mut previous: WeatherState,
        reading: &TimeReading,
        rng: &mut dyn RngCore,
    ) -> WeatherUpdate {
        let (terrain_id, terrain) = self.resolve_terrain(Some(&previous.terrain));
        if terrain_id != previous.terrain {
            previous.terrain = terrain_id.to_string();
        }
        let season = self.resolve_season(reading, Some(&previous.season));
        let time_period = reading.time_period(&self.settings.classifier);

        let inputs = WeatherInputs {
            terrain,
            previous: Some(&previous),
            variability: self.settings.variability,
            season: &season,
            time_period,
            now: reading.now,
        };
        let (state, trace) = calculate(&inputs, &self.campaign, rng);

        tracing::info!(
            %scene,
            terrain = %state.terrain,
            season = %state.season,
            period = %time_period,
            temperature = state.temperature,
            wind = state.wind,
            precipitation = state.precipitation,
            humidity = state.humidity,
            "weather updated"
        );
        store.put(scene, state.clone());
        WeatherUpdate { state, trace }
    }

    // -----------------------------------------------------------------------
    // Forecast and reporting
    // -----------------------------------------------------------------------

    /// Project the configured number of days from the scene's stored state.
    pub fn forecast_scene(
        &self,
        store: &dyn WeatherStateStore,
        scene: &SceneId,
        rng: &mut dyn RngCore,
    ) -> Option<Vec<DayForecast>> {
        let state = store.get(scene)?;
        let (_, terrain) = self.resolve_terrain(Some(&state.terrain));
        Some(project(
            terrain,
            state.values(),
            self.settings.variability,
            self.settings.forecast_days,
            rng,
        ))
    }

    /// Descriptions, rule effects and narrative for a state.
    ///
    /// The generator is consulted only when AI descriptions are enabled in settings.
    pub fn report(
        &self,
        state: &WeatherState,
        time_period: TimePeriod,
        generator: Option<&dyn DescriptionGenerator>,
    ) -> WeatherReport {
        let (_, terrain) = self.resolve_terrain(Some(&state.terrain));
        let descriptions = describe(state, &self.campaign);
        let summary =
            ConditionsSummary::new(&terrain.name, &descriptions, time_period, &self.campaign.name);
        let generator = generator.filter(|_| self.settings.use_ai_descriptions);

        WeatherReport {
            terrain_name: terrain.name.clone(),
            season_name: self.campaign.seasons.get(&state.season).map(|s| s.name.clone()),
            time_period,
            values: state.values(),
            effects: active_effects(state, &self.campaign),
            survival_rules: terrain.rules.clone(),
            narrative: narrate(&summary, generator),
            descriptions,
        }
    }

    /// Report for a stored scene at the current time of day.
    pub fn scene_report(
        &self,
        store: &dyn WeatherStateStore,
        scene: &SceneId,
        time: &dyn TimeSource,
        generator: Option<&dyn DescriptionGenerator>,
    ) -> Option<WeatherReport> {
        let state = store.get(scene)?;
        let period = time.current_time_period(&self.settings.classifier);
        Some(self.report(&state, period, generator))
    }

    // -----------------------------------------------------------------------
    // Reference-data resolution
    // -----------------------------------------------------------------------

    fn resolve_terrain(&self, id: Option<&str>) -> (&str, &Terrain) {
        if let Some(id) = id
            && let Some((key, terrain)) = self.campaign.terrains.get_key_value(id)
        {
            return (key.as_str(), terrain);
        }
        let fallback = self.campaign.fallback_terrain_id();
        if let Some(id) = id {
            tracing::warn!(terrain = id, fallback, "unknown terrain; using fallback");
        }
        match self.campaign.terrains.get_key_value(fallback) {
            Some((key, terrain)) => (key.as_str(), terrain),
            None => unreachable!("validated campaign has a fallback terrain"),
        }
    }

    /// Calendar season, then the manual season, then the previous state's season.
    fn resolve_season(&self, reading: &TimeReading, previous: Option<&str>) -> String {
        let candidates = [
            reading.season.as_deref(),
            self.settings.manual_season.as_deref(),
            previous.filter(|s| !s.is_empty()),
        ];
        let mut unmatched = None;
        for candidate in candidates.into_iter().flatten() {
            if let Some(id) = self.campaign.find_season_id(candidate) {
                return id.to_string();
            }
            unmatched = unmatched.or(Some(candidate));
        }
        let fallback = self.campaign.fallback_season_id();
        if let Some(season) = unmatched {
            tracing::warn!(season, ?fallback, "unknown season; using fallback");
        }
        fallback.or(unmatched).unwrap_or_default().to_string()
    }
}
