//! Walk one scene through two in-game days and print reports plus a forecast.
//!
//! Usage: cargo run --example forecast_demo [seed] [terrain]

use rand::SeedableRng;
use rand::rngs::SmallRng;
use scene_weather::model::{CampaignData, SceneId, WorldTime};
use scene_weather::store::MemoryStore;
use scene_weather::time_source::{ManualClock, TimeSource};
use scene_weather::weather::{WeatherEngine, WeatherSettings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(42);
    let terrain = args.next().unwrap_or_else(|| "mountains".to_string());

    let campaign = CampaignData::builtin()?;
    println!("{}: {}", campaign.name, campaign.description);
    let mut engine = WeatherEngine::new(campaign, WeatherSettings::default())?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut store = MemoryStore::new();
    let mut clock = ManualClock::new(WorldTime::new(0, 6, 0), Some("autumn".to_string()));
    let scene = SceneId::from("demo");

    engine.initialize_scene(&mut store, &scene, Some(&terrain), &clock);

    for _ in 0..8 {
        if let Some(update) = engine.update_scene(&mut store, &scene, &clock, &mut rng, false) {
            let report = engine.report(&update.state, update.trace.time_period, None);
            println!("\n[{}]\n{report}", clock.now());
        }
        clock.advance_hours(6);
    }

    clock.season = None;
    engine.set_season(&mut store, &scene, "Winter", &clock, &mut rng)?;

    println!("\nForecast:");
    for day in engine
        .forecast_scene(&store, &scene, &mut rng)
        .unwrap_or_default()
    {
        println!(
            "  day {}: T{:+} W{:+} P{:+} H{:+}  {}",
            day.day,
            day.values.temperature,
            day.values.wind,
            day.values.precipitation,
            day.values.humidity,
            day.summary()
        );
    }
    Ok(())
}
