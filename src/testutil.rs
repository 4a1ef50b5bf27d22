use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::model::*;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A bare terrain with the given baselines and no modifiers.
pub fn terrain(temperature: i32, wind: i32, precipitation: i32, humidity: i32) -> Terrain {
    Terrain {
        name: "Test Terrain".to_string(),
        description: String::new(),
        temperature,
        wind,
        precipitation,
        humidity,
        time_modifiers: BTreeMap::new(),
        rules: Vec::new(),
    }
}

/// Small campaign used across unit tests.
///
/// Terrains: `desert`, `plains`. Seasons: `summer`, `winter` ("Deep Winter").
pub fn campaign_json() -> &'static str {
    r#"{
        "name": "Test Campaign",
        "terrains": {
            "plains": {
                "name": "Open Plains",
                "temperature": 5, "wind": 2, "precipitation": 0, "humidity": 3,
                "rules": ["Visibility is excellent."]
            },
            "desert": {
                "name": "Desert",
                "temperature": 8, "wind": 1, "precipitation": -8, "humidity": -7,
                "timeModifiers": { "Night": { "temperature": -6 } }
            }
        },
        "seasons": {
            "summer": { "name": "Summer", "modifiers": { "temperature": 3, "humidity": 1 } },
            "winter": { "name": "Deep Winter", "modifiers": { "temperature": -4, "variability": 1 } }
        },
        "timeModifiers": {
            "Night": { "temperature": -2, "wind": -1 },
            "Noon": { "temperature": 2 }
        },
        "weatherDimensions": {
            "temperature": {
                "descriptions": { "-10": "Freezing", "-5": "Cold", "0": "Mild", "5": "Warm", "10": "Scorching" },
                "rules": [{ "max": -5, "effect": "Exposure checks every hour." }]
            },
            "wind": {
                "descriptions": { "-10": "Still", "0": "Breezy", "5": "Gusty", "10": "Gale" },
                "rules": [{ "min": 5, "effect": "Ranged attacks have disadvantage." }]
            },
            "precipitation": {
                "descriptions": { "-10": "Bone dry", "0": "Overcast", "5": "Rain", "10": "Downpour" }
            },
            "humidity": {
                "descriptions": { "-10": "Parched", "0": "Comfortable", "5": "Muggy" }
            }
        }
    }"#
}

pub fn minimal_campaign() -> CampaignData {
    CampaignData::from_json(campaign_json()).unwrap()
}

pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
