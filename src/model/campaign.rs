use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::dimension::{DIMENSION_MAX, DIMENSION_MIN, Dimension};
use super::modifier::ModifierRecord;
use super::season::Season;
use super::terrain::Terrain;
use super::time_period::TimePeriod;
use crate::error::ConfigError;

const BUILTIN_CAMPAIGN: &str = include_str!("../../campaigns/default.json");

// ---------------------------------------------------------------------------
// Rules and per-dimension tables
// ---------------------------------------------------------------------------

/// Narrative effect that applies while a dimension sits inside `[min, max]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
    pub effect: String,
}

impl Rule {
    pub fn applies_to(&self, value: i32) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Description levels and rules for one weather dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionConfig {
    pub descriptions: BTreeMap<i32, String>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

// ---------------------------------------------------------------------------
// CampaignData
// ---------------------------------------------------------------------------

/// Campaign-wide reference data: terrains, seasons, modifier tables and description tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignData {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_terrain: Option<String>,
    pub terrains: BTreeMap<String, Terrain>,
    #[serde(default)]
    pub seasons: BTreeMap<String, Season>,
    #[serde(default)]
    pub time_modifiers: BTreeMap<TimePeriod, ModifierRecord>,
    pub weather_dimensions: BTreeMap<Dimension, DimensionConfig>,
}

impl CampaignData {
    /// Parse and validate a campaign document.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let campaign: CampaignData = serde_json::from_str(input)?;
        campaign.validate()?;
        Ok(campaign)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json(&input)
    }

    /// The campaign shipped with the crate.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_CAMPAIGN)
    }

    /// Check everything the calculation path assumes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terrains.is_empty() {
            return Err(ConfigError::NoTerrains);
        }
        if let Some(id) = &self.default_terrain
            && !self.terrains.contains_key(id)
        {
            return Err(ConfigError::UnknownTerrain(id.clone()));
        }
        for (id, terrain) in &self.terrains {
            for (dimension, &value) in terrain.baselines().iter() {
                if !(DIMENSION_MIN..=DIMENSION_MAX).contains(&value) {
                    return Err(ConfigError::BaselineOutOfRange {
                        terrain: id.clone(),
                        dimension,
                        value,
                    });
                }
            }
            for (period, modifier) in &terrain.time_modifiers {
                check_modifier(modifier, || format!("terrain {id} at {period}"))?;
            }
        }
        for (id, season) in &self.seasons {
            check_modifier(&season.modifiers, || format!("season {id}"))?;
        }
        for (period, modifier) in &self.time_modifiers {
            check_modifier(modifier, || format!("time period {period}"))?;
        }
        for &dimension in Dimension::ALL {
            let config = self
                .weather_dimensions
                .get(&dimension)
                .ok_or(ConfigError::MissingDimension(dimension))?;
            if config.descriptions.is_empty() {
                return Err(ConfigError::EmptyDescriptions(dimension));
            }
            for rule in &config.rules {
                if let (Some(min), Some(max)) = (rule.min, rule.max)
                    && min > max
                {
                    return Err(ConfigError::InvertedRule {
                        dimension,
                        min,
                        max,
                    });
                }
            }
        }
        Ok(())
    }

    /// Terrain used when a scene references nothing valid.
    pub fn fallback_terrain_id(&self) -> &str {
        self.default_terrain
            .as_deref()
            .or_else(|| self.terrains.keys().next().map(String::as_str))
            .unwrap_or_default()
    }

    /// First season in id order, if any season is defined.
    pub fn fallback_season_id(&self) -> Option<&str> {
        self.seasons.keys().next().map(String::as_str)
    }

    pub fn terrain(&self, id: &str) -> Option<&Terrain> {
        self.terrains.get(id)
    }

    /// Look up a season by id, then by display name (case-insensitive). Returns the id.
    pub fn find_season_id(&self, candidate: &str) -> Option<&str> {
        if let Some((id, _)) = self.seasons.get_key_value(candidate) {
            return Some(id.as_str());
        }
        self.seasons
            .iter()
            .find(|(_, season)| season.matches_name(candidate))
            .map(|(id, _)| id.as_str())
    }

    /// Season modifiers for `id`, zero when the season is unknown.
    pub fn season_modifier(&self, id: &str) -> ModifierRecord {
        self.seasons
            .get(id)
            .map(|s| s.modifiers)
            .unwrap_or(ModifierRecord::ZERO)
    }

    /// Campaign-wide modifier for `period`, zero when absent.
    pub fn global_time_modifier(&self, period: TimePeriod) -> ModifierRecord {
        self.time_modifiers
            .get(&period)
            .copied()
            .unwrap_or(ModifierRecord::ZERO)
    }

    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionConfig> {
        self.weather_dimensions.get(&dimension)
    }
}

fn check_modifier(
    modifier: &ModifierRecord,
    owner: impl FnOnce() -> String,
) -> Result<(), ConfigError> {
    match modifier.out_of_range_field() {
        Some((field, value)) => Err(ConfigError::ModifierOutOfRange {
            owner: owner(),
            field,
            value,
        }),
        None => Ok(()),
    }
}
