//! One weather update: bounded random walk toward terrain baselines, plus
//! time-of-day and season modifiers.

use rand::{Rng, RngCore};
use serde::Serialize;

use crate::model::{
    CampaignData, Dimension, Dimensions, ModifierRecord, Terrain, TimePeriod, WeatherState,
    WorldTime, clamp_level,
};

/// Upper bound of the variability setting.
pub const MAX_VARIABILITY: i32 = 10;

/// Everything one calculation depends on, besides campaign tables and randomness.
#[derive(Debug, Clone, Copy)]
pub struct WeatherInputs<'a> {
    /// Already resolved by the caller; unknown ids never reach the calculator.
    pub terrain: &'a Terrain,
    pub previous: Option<&'a WeatherState>,
    pub variability: i32,
    pub season: &'a str,
    pub time_period: TimePeriod,
    pub now: WorldTime,
}

/// Every intermediate quantity of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationTrace {
    pub terrain_baselines: Dimensions<i32>,
    pub previous: Option<Dimensions<i32>>,
    pub base_variability: i32,
    pub effective_variability: i32,
    pub random_factors: Dimensions<f64>,
    pub time_period: TimePeriod,
    pub global_time_modifier: ModifierRecord,
    pub terrain_time_modifier: ModifierRecord,
    pub time_modifier: ModifierRecord,
    pub season: String,
    pub season_known: bool,
    pub season_modifier: ModifierRecord,
    pub intermediate: Dimensions<i32>,
    pub final_values: Dimensions<i32>,
}

/// Random-walk amplitude for one dimension. Temperature moves at half the rate of the others.
pub fn amplitude(dimension: Dimension, variability: f64) -> f64 {
    match dimension {
        Dimension::Temperature => variability / 4.0,
        Dimension::Wind | Dimension::Precipitation | Dimension::Humidity => variability / 2.0,
    }
}

/// Uniform draw on `[-amplitude, amplitude]`.
pub fn random_factor(rng: &mut dyn RngCore, amplitude: f64) -> f64 {
    (rng.random::<f64>() * 2.0 - 1.0) * amplitude
}

/// Derive the next state of a scene.
///
/// Order: random draws, interpolated base (rounded), time modifier (global + terrain),
/// season modifier, clamp. Temperature always restarts from the terrain baseline; the
/// other dimensions average the baseline with the previous value.
pub fn calculate(
    inputs: &WeatherInputs<'_>,
    campaign: &CampaignData,
    rng: &mut dyn RngCore,
) -> (WeatherState, CalculationTrace) {
    let baselines = inputs.terrain.baselines();
    let previous = inputs.previous.map(WeatherState::values);

    let global_time_modifier = campaign.global_time_modifier(inputs.time_period);
    let terrain_time_modifier = inputs.terrain.time_modifier(inputs.time_period);
    let time_modifier = global_time_modifier + terrain_time_modifier;

    let season_known = campaign.seasons.contains_key(inputs.season);
    let season_modifier = campaign.season_modifier(inputs.season);

    let effective_variability = inputs
        .variability
        .saturating_add(season_modifier.variability)
        .saturating_add(time_modifier.variability)
        .clamp(0, MAX_VARIABILITY);
    let v = f64::from(effective_variability);

    let random_factors = Dimensions::from_fn(|d| random_factor(rng, amplitude(d, v)));

    let intermediate = baselines.zip(random_factors).map(|d, (base, factor)| {
        let base = f64::from(base);
        let anchor = match d {
            Dimension::Temperature => base,
            _ => {
                let prev = previous.map_or(base, |p| f64::from(p[d]));
                (base + prev) / 2.0
            }
        };
        (anchor + factor).round() as i32
    });

    let modifiers = time_modifier.deltas().zip(season_modifier.deltas());
    let final_values = intermediate
        .zip(modifiers)
        .map(|_, (value, (time, season))| {
            clamp_level(value.saturating_add(time).saturating_add(season))
        });

    tracing::trace!(
        period = %inputs.time_period,
        season = inputs.season,
        ?final_values,
        "weather calculated"
    );

    let terrain_id = inputs
        .previous
        .map(|p| p.terrain.clone())
        .unwrap_or_else(|| inputs.terrain.derived_id());

    let state = WeatherState::from_values(
        final_values,
        terrain_id,
        inputs.season.to_string(),
        inputs.now,
    );

    let trace = CalculationTrace {
        terrain_baselines: baselines,
        previous,
        base_variability: inputs.variability,
        effective_variability,
        random_factors,
        time_period: inputs.time_period,
        global_time_modifier,
        terrain_time_modifier,
        time_modifier,
        season: inputs.season.to_string(),
        season_known,
        season_modifier,
        intermediate,
        final_values,
    };

    (state, trace)
}
