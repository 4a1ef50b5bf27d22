//! Turning numeric state into narrative text.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::model::{CampaignData, Dimension, Dimensions, TimePeriod, WeatherState};

/// Pick the description level for `value`.
///
/// Negative values scan upward for the first level `>= value`; non-negative values scan
/// downward for the first level `<= value`. With no match, the lowest level is used.
/// Returns `None` only for an empty table, which campaign validation rules out.
pub fn bucketize(value: i32, table: &BTreeMap<i32, String>) -> Option<&str> {
    let hit = if value < 0 {
        table.range(value..).next()
    } else {
        table.range(..=value).next_back()
    };
    hit.or_else(|| table.iter().next())
        .map(|(_, text)| text.as_str())
}

/// Description text for every dimension of `state`.
pub fn describe(state: &WeatherState, campaign: &CampaignData) -> Dimensions<String> {
    state.values().map(|d, value| {
        campaign
            .dimension(d)
            .and_then(|config| bucketize(value, &config.descriptions))
            .unwrap_or_default()
            .to_string()
    })
}

/// Effects of every dimension rule whose range contains the current value.
pub fn active_effects(state: &WeatherState, campaign: &CampaignData) -> Vec<String> {
    let values = state.values();
    Dimension::ALL
        .iter()
        .filter_map(|&d| campaign.dimension(d).map(|config| (d, config)))
        .flat_map(|(d, config)| {
            config
                .rules
                .iter()
                .filter(move |rule| rule.applies_to(values[d]))
                .map(|rule| rule.effect.clone())
        })
        .collect()
}

// ---------------------------------------------------------------------------
// ConditionsSummary
// ---------------------------------------------------------------------------

/// Structured input for a narrative generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionsSummary {
    pub terrain: String,
    pub temp_desc: String,
    pub wind_desc: String,
    pub precip_desc: String,
    pub humid_desc: String,
    pub time_period: TimePeriod,
    pub campaign_name: String,
}

impl ConditionsSummary {
    pub fn new(
        terrain: &str,
        descriptions: &Dimensions<String>,
        time_period: TimePeriod,
        campaign_name: &str,
    ) -> Self {
        Self {
            terrain: terrain.to_string(),
            temp_desc: descriptions.temperature.clone(),
            wind_desc: descriptions.wind.clone(),
            precip_desc: descriptions.precipitation.clone(),
            humid_desc: descriptions.humidity.clone(),
            time_period,
            campaign_name: campaign_name.to_string(),
        }
    }

    /// Prompt text handed to a narrative generator.
    pub fn prompt(&self) -> String {
        format!(
            "Describe the current weather in 2-3 evocative sentences for a tabletop game \
             set in {campaign}.\n\
             Terrain: {terrain}\n\
             Time of day: {period}\n\
             Temperature: {temp}\n\
             Wind: {wind}\n\
             Precipitation: {precip}\n\
             Humidity: {humid}\n\
             Do not mention game mechanics or numbers.",
            campaign = self.campaign_name,
            terrain = self.terrain,
            period = self.time_period,
            temp = self.temp_desc,
            wind = self.wind_desc,
            precip = self.precip_desc,
            humid = self.humid_desc,
        )
    }

    /// Deterministic narrative used when no generator is configured or it fails.
    pub fn fallback_narrative(&self) -> String {
        let mut text = format!("{} ({})", self.terrain, self.time_period);
        for desc in [
            &self.temp_desc,
            &self.wind_desc,
            &self.precip_desc,
            &self.humid_desc,
        ] {
            if !desc.is_empty() {
                text.push_str(". ");
                text.push_str(desc);
            }
        }
        text.push('.');
        text
    }
}

// ---------------------------------------------------------------------------
// WeatherReport
// ---------------------------------------------------------------------------

/// Everything a presentation layer needs to show the weather of a scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub terrain_name: String,
    pub season_name: Option<String>,
    pub time_period: TimePeriod,
    pub values: Dimensions<i32>,
    pub descriptions: Dimensions<String>,
    pub effects: Vec<String>,
    pub survival_rules: Vec<String>,
    pub narrative: String,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.terrain_name, self.time_period)?;
        if let Some(season) = &self.season_name {
            write!(f, ", {season}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.narrative)?;
        for (dimension, desc) in self.descriptions.iter() {
            writeln!(f, "  {dimension}: {desc} ({})", self.values[dimension])?;
        }
        for effect in self.effects.iter().chain(&self.survival_rules) {
            writeln!(f, "  * {effect}")?;
        }
        Ok(())
    }
}
