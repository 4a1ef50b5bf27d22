use std::collections::BTreeMap;

use super::WeatherStateStore;
use crate::model::{SceneId, WeatherState};

/// In-process store keyed by scene.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    states: BTreeMap<SceneId, WeatherState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SceneId, &WeatherState)> {
        self.states.iter()
    }

    pub fn remove(&mut self, scene: &SceneId) -> Option<WeatherState> {
        self.states.remove(scene)
    }
}

impl WeatherStateStore for MemoryStore {
    fn get(&self, scene: &SceneId) -> Option<WeatherState> {
        self.states.get(scene).cloned()
    }

    fn put(&mut self, scene: &SceneId, state: WeatherState) {
        self.states.insert(scene.clone(), state);
    }
}

impl FromIterator<(SceneId, WeatherState)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (SceneId, WeatherState)>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}
