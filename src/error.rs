use thiserror::Error;

use crate::model::Dimension;

/// Problems with campaign data or settings, caught at load time or on explicit user changes.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read campaign data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse campaign data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("campaign defines no terrains")]
    NoTerrains,
    #[error("unknown terrain: {0}")]
    UnknownTerrain(String),
    #[error("unknown season: {0}")]
    UnknownSeason(String),
    #[error("terrain {terrain} has {dimension} baseline {value} outside [-10, 10]")]
    BaselineOutOfRange {
        terrain: String,
        dimension: Dimension,
        value: i32,
    },
    #[error("{owner} modifier {field} = {value} is outside [-20, 20]")]
    ModifierOutOfRange {
        owner: String,
        field: &'static str,
        value: i32,
    },
    #[error("weather dimension {0} is not configured")]
    MissingDimension(Dimension),
    #[error("weather dimension {0} has no descriptions")]
    EmptyDescriptions(Dimension),
    #[error("rule for {dimension} has min {min} above max {max}")]
    InvertedRule {
        dimension: Dimension,
        min: i32,
        max: i32,
    },
    #[error("hour {0} is outside the day")]
    HourOutOfRange(u32),
    #[error("hour {0} is covered by more than one time-period range")]
    OverlappingHourRanges(u32),
    #[error("variability {0} is outside [0, 10]")]
    VariabilityOutOfRange(i32),
    #[error("forecast of {0} days is outside [1, 30]")]
    ForecastDaysOutOfRange(u32),
}

/// Failure reported by an external narrative generator.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("narrative generator unavailable: {0}")]
    Unavailable(String),
    #[error("narrative generator returned no text")]
    Empty,
}
