mod common;

use common::{build_engine, builtin_campaign, clock_at, rng};
use scene_weather::model::*;
use scene_weather::store::MemoryStore;
use scene_weather::weather::project;

#[test]
fn calm_forecast_from_baselines_is_steady() {
    let engine = build_engine(0);
    let mut store = MemoryStore::new();
    let scene = SceneId::from("plain");
    engine.initialize_scene(&mut store, &scene, Some("grassland"), &clock_at(0, 9, None));

    let days = engine.forecast_scene(&store, &scene, &mut rng(1)).unwrap();

    assert_eq!(days.len(), 5);
    for (i, day) in days.iter().enumerate() {
        assert_eq!(day.day as usize, i + 1);
        assert_eq!(day.values, Dimensions::new(3, 3, 0, 1));
        assert_eq!(day.summary(), "steady");
    }
}

#[test]
fn forecast_drifts_back_toward_baselines() {
    let campaign = builtin_campaign();
    let desert = campaign.terrain("desert").unwrap();
    let days = project(desert, Dimensions::new(-10, 10, 10, 10), 0, 5, &mut rng(2));

    // halfway to the baseline each day
    assert_eq!(days[0].values, Dimensions::new(-1, 6, 1, 1));
    assert_eq!(days[0].changes.temperature, Some("warmer"));
    assert_eq!(days[0].changes.wind, Some("calmer"));
    assert_eq!(days[0].changes.precipitation, Some("drier"));
    assert_eq!(days[0].changes.humidity, Some("less humid"));
    assert_eq!(days[4].values.temperature, 8);
}

#[test]
fn wild_forecast_stays_in_range() {
    let campaign = builtin_campaign();
    for (id, terrain) in &campaign.terrains {
        let days = project(terrain, terrain.baselines(), 10, 30, &mut rng(id.len() as u64));
        assert_eq!(days.len(), 30);
        assert!(days.iter().all(|d| d.values.in_range()), "{id} left range");
    }
}

#[test]
fn forecast_is_reproducible_with_same_seed() {
    let engine = build_engine(7);
    let mut store = MemoryStore::new();
    let scene = SceneId::from("cliffs");
    engine.initialize_scene(&mut store, &scene, Some("coast"), &clock_at(0, 9, None));

    let a = engine.forecast_scene(&store, &scene, &mut rng(99)).unwrap();
    let b = engine.forecast_scene(&store, &scene, &mut rng(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_scene_has_no_forecast() {
    let engine = build_engine(5);
    let store = MemoryStore::new();
    assert!(engine.forecast_scene(&store, &SceneId::from("nowhere"), &mut rng(1)).is_none());
}
