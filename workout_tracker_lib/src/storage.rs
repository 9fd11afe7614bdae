use std::collections::HashMap;

use crate::{workout::Workout, StorageError};

/// A string key-value store such as the browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Keeps the whole workout list as one JSON array under a single key.
/// Every save rewrites the full list.
pub struct WorkoutStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> WorkoutStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn save(&mut self, workouts: &[Workout]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(workouts).map_err(|err| StorageError::Corrupt(err.to_string()))?;
        self.store.set(&self.key, &blob)?;
        tracing::debug!(count = workouts.len(), key = %self.key, "Saved workouts");
        Ok(())
    }

    /// An absent key is an empty list. Stored values are taken as they are,
    /// nothing derived is recomputed.
    pub fn load(&self) -> Result<Vec<Workout>, StorageError> {
        let Some(blob) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        // A stored `null` reads as nothing stored.
        let workouts = serde_json::from_str::<Option<Vec<Workout>>>(&blob)
            .map_err(|err| StorageError::Corrupt(err.to_string()))?
            .unwrap_or_default();

        tracing::debug!(count = workouts.len(), key = %self.key, "Loaded workouts");
        Ok(workouts)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(&self.key)?;
        tracing::info!(key = %self.key, "Cleared stored workouts");
        Ok(())
    }

    pub fn inner(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{config::STORAGE_KEY, workout::{Coordinate, Metrics, WorkoutKind}};

    fn store() -> WorkoutStore<MemoryStore> {
        WorkoutStore::new(MemoryStore::new(), STORAGE_KEY)
    }

    #[test]
    fn missing_key_loads_empty() {
        assert_eq!(store().load(), Ok(Vec::new()));
    }

    #[test]
    fn round_trip_keeps_running_fields() {
        let mut store = store();
        let run = Workout::running(Coordinate::new(39.0, -12.0), 5.2, 24.0, 178.0, Utc::now());
        store.save(std::slice::from_ref(&run)).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        let restored = &loaded[0];
        assert_eq!(restored.id(), run.id());
        assert_eq!(restored.kind(), WorkoutKind::Running);
        assert_eq!(restored.coords(), Coordinate::new(39.0, -12.0));
        assert_eq!(restored.distance(), 5.2);
        assert_eq!(restored.duration(), 24.0);
        assert_eq!(restored.pace(), Some(24.0 / 5.2));
        assert_eq!(restored, &run);
    }

    #[test]
    fn save_rewrites_the_whole_list() {
        let mut store = store();
        let run = Workout::running(Coordinate::new(1.0, 1.0), 5.0, 30.0, 150.0, Utc::now());
        let ride = Workout::cycling(Coordinate::new(2.0, 2.0), 20.0, 60.0, 400.0, Utc::now());

        store.save(std::slice::from_ref(&run)).unwrap();
        store.save(&[run.clone(), ride.clone()]).unwrap();

        assert_eq!(store.load().unwrap(), vec![run, ride]);
    }

    #[test]
    fn snapshot_shape() {
        let mut store = store();
        let ride = Workout::cycling(Coordinate::new(39.0, -12.0), 27.0, 95.0, 523.0, Utc::now());
        store.save(&[ride]).unwrap();

        let blob = store.inner().get(STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
        let entry = &value[0];
        assert_eq!(entry["type"], "cycling");
        assert_eq!(entry["coords"], serde_json::json!([39.0, -12.0]));
        assert_eq!(entry["elevationGain"], 523.0);
        assert!(entry["date"].is_string());
        assert!(entry["speed"].is_number());
    }

    #[test]
    fn reads_legacy_blob_without_recomputing() {
        let mut memory = MemoryStore::new();
        let blob = r#"[{"date":"2024-04-14T09:30:00.000Z","id":"3100000123","coords":[39,-12],"distance":27,"duration":95,"type":"cycling","elevationGainee":523,"speed":99,"description":"Cycling on April 14"}]"#;
        memory.set(STORAGE_KEY, blob).unwrap();

        let loaded = WorkoutStore::new(memory, STORAGE_KEY).load().unwrap();
        assert_eq!(loaded[0].speed(), Some(99.0));
        assert_eq!(loaded[0].description(), "Cycling on April 14");
        assert_eq!(loaded[0].metrics(), &Metrics::Cycling { elevation_gain: 523.0, speed: 99.0 });
    }

    #[test]
    fn null_and_garbage() {
        let mut memory = MemoryStore::new();
        memory.set(STORAGE_KEY, "null").unwrap();
        assert_eq!(WorkoutStore::new(memory.clone(), STORAGE_KEY).load(), Ok(Vec::new()));

        memory.set(STORAGE_KEY, "{not json").unwrap();
        assert!(matches!(WorkoutStore::new(memory, STORAGE_KEY).load(), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn clear_removes_the_key() {
        let mut store = store();
        let run = Workout::running(Coordinate::new(1.0, 1.0), 5.0, 30.0, 150.0, Utc::now());
        store.save(&[run]).unwrap();
        store.clear().unwrap();
        assert_eq!(store.inner().get(STORAGE_KEY), Ok(None));
        assert_eq!(store.load(), Ok(Vec::new()));
    }
}
