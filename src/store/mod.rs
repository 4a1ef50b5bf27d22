//! Durable per-scene weather state.
//!
//! `put` takes `&mut self`, so one store has at most one writer at a time. Hosts that
//! share a store across tasks must serialize read-modify-write per scene themselves.

mod jsonl;
mod memory;

pub use jsonl::JsonlStore;
pub use memory::MemoryStore;

use crate::model::{SceneId, WeatherState};

pub trait WeatherStateStore {
    fn get(&self, scene: &SceneId) -> Option<WeatherState>;
    fn put(&mut self, scene: &SceneId, state: WeatherState);
}
