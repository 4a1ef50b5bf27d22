#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::SmallRng;
use scene_weather::model::*;
use scene_weather::time_source::ManualClock;
use scene_weather::weather::{WeatherEngine, WeatherSettings};

pub fn builtin_campaign() -> CampaignData {
    CampaignData::builtin().unwrap()
}

pub fn build_engine(variability: i32) -> WeatherEngine {
    let settings = WeatherSettings {
        variability,
        ..WeatherSettings::default()
    };
    WeatherEngine::new(builtin_campaign(), settings).unwrap()
}

pub fn clock_at(day: u64, hour: u64, season: Option<&str>) -> ManualClock {
    ManualClock::new(WorldTime::new(day, hour, 0), season.map(str::to_string))
}

pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
