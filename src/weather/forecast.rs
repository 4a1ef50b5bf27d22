//! Multi-day projection with widening uncertainty.
//!
//! Runs the blending step forward without time-of-day or season modifiers: the forecast
//! shows the terrain-driven trend only. Each day depends on the previous one, so the
//! sequence is built eagerly in order.

use rand::RngCore;
use serde::Serialize;

use super::calculator::random_factor;
use crate::model::{Dimension, Dimensions, Terrain, clamp_round};

/// Days shown when the caller has no preference.
pub const DEFAULT_FORECAST_DAYS: u32 = 5;

/// Longest forecast settings may ask for.
pub const MAX_FORECAST_DAYS: u32 = 30;

/// Extra variability added per day ahead.
const UNCERTAINTY_PER_DAY: f64 = 0.2;

/// Differences smaller than this get no change indicator.
const CHANGE_THRESHOLD: f64 = 0.5;

/// One projected day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayForecast {
    /// 1 is tomorrow.
    pub day: u32,
    pub values: Dimensions<i32>,
    /// Change relative to the day before (or the starting state for day 1).
    pub changes: Dimensions<Option<&'static str>>,
}

impl DayForecast {
    /// Comma-separated change phrases, or "steady" when nothing moved.
    pub fn summary(&self) -> String {
        let phrases: Vec<&str> = self.changes.iter().filter_map(|(_, c)| *c).collect();
        if phrases.is_empty() {
            "steady".to_string()
        } else {
            phrases.join(", ")
        }
    }
}

/// Variability for the `day`-th day ahead (1-based).
pub fn day_variability(variability: i32, day: u32) -> f64 {
    f64::from(variability) * (1.0 + f64::from(day) * UNCERTAINTY_PER_DAY)
}

pub fn change_indicator(dimension: Dimension, previous: i32, current: i32) -> Option<&'static str> {
    let diff = f64::from(current - previous);
    if diff.abs() < CHANGE_THRESHOLD {
        return None;
    }
    let (rising, falling) = dimension.change_phrases();
    Some(if diff > 0.0 { rising } else { falling })
}

/// Project `days` days forward from `start`.
pub fn project(
    terrain: &Terrain,
    start: Dimensions<i32>,
    variability: i32,
    days: u32,
    rng: &mut dyn RngCore,
) -> Vec<DayForecast> {
    let baselines = terrain.baselines();
    let mut previous = start;
    let mut forecast = Vec::with_capacity(days as usize);

    for day in 1..=days {
        let amplitude = day_variability(variability, day) / 2.0;
        let values = baselines.zip(previous).map(|_, (base, prev)| {
            let blended = (f64::from(base) + f64::from(prev)) / 2.0;
            clamp_round(blended + random_factor(rng, amplitude))
        });
        let changes = previous
            .zip(values)
            .map(|d, (before, after)| change_indicator(d, before, after));

        forecast.push(DayForecast {
            day,
            values,
            changes,
        });
        previous = values;
    }

    forecast
}
