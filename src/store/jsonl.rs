use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{MemoryStore, WeatherStateStore};
use crate::model::{SceneId, WeatherState};

/// One line of the store file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SceneRecord {
    scene_id: SceneId,
    state: WeatherState,
}

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Scene states kept in memory and checkpointed to a JSONL file on `save`.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    path: PathBuf,
    states: MemoryStore,
}

impl JsonlStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let states = if path.exists() {
            let reader = BufReader::new(File::open(&path)?);
            let mut records = Vec::new();
            for line in reader.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let record: SceneRecord = serde_json::from_str(&line)?;
                records.push((record.scene_id, record.state));
            }
            records.into_iter().collect()
        } else {
            MemoryStore::new()
        };
        tracing::debug!(path = %path.display(), scenes = states.len(), "opened weather store");
        Ok(Self { path, states })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write every scene to the store file, creating parent directories as needed.
    pub fn save(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        write_jsonl(
            &self.path,
            self.states.iter().map(|(scene_id, state)| SceneRecord {
                scene_id: scene_id.clone(),
                state: state.clone(),
            }),
        )
    }
}

impl WeatherStateStore for JsonlStore {
    fn get(&self, scene: &SceneId) -> Option<WeatherState> {
        self.states.get(scene)
    }

    fn put(&mut self, scene: &SceneId, state: WeatherState) {
        self.states.put(scene, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WorldTime;
    use crate::testutil::terrain;

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlStore::open(dir.path().join("weather.jsonl")).unwrap();
        assert!(store.get(&SceneId::from("any")).is_none());
    }

    #[test]
    fn save_writes_one_line_per_scene() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("weather.jsonl");
        let mut store = JsonlStore::open(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        let t = terrain(3, 0, -2, 1);
        store.put(
            &SceneId::from("docks"),
            WeatherState::seeded("coast", &t, "summer", WorldTime::from_seconds(10)),
        );
        store.put(
            &SceneId::from("keep"),
            WeatherState::seeded("hills", &t, "summer", WorldTime::from_seconds(20)),
        );
        store.save().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["sceneId"], "docks");
        assert_eq!(first["state"]["terrain"], "coast");
    }

    #[test]
    fn malformed_line_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.jsonl");
        fs::write(&path, "{not json}\n").unwrap();
        let err = JsonlStore::open(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
