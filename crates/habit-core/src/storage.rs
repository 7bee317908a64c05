//! Persistence Layer
//!
//! `KeyValueStore` is the raw string store (browser `localStorage` in the
//! UI, `MemoryStore` in tests). `PersistentStore` wraps one and speaks JSON,
//! turning every failure into a logged fallback.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{StoreError, StoreResult};

/// Synchronous string key-value store
pub trait KeyValueStore {
    /// Read the raw value for `key`, `None` when absent
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the raw value for `key`
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Keys of the two persisted entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub habits: String,
    pub streak: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            habits: "habits".to_string(),
            streak: "streak".to_string(),
        }
    }
}

/// In-memory store. Clones share the same entries, so a test can keep a
/// handle and reopen a fresh controller on the same data.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    available: Arc<AtomicBool>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            entries: Arc::default(),
            available: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a store that rejects every call (private browsing, quota, ...)
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Raw stored string, bypassing availability
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    /// Seed a raw string, bypassing availability
    pub fn insert_raw(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("memory store disabled".to_string()))
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.check_available()?;
        let entries = self.entries.lock().map_err(|e| StoreError::Read {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check_available()?;
        let mut entries = self.entries.lock().map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON adapter over a `KeyValueStore`
#[derive(Debug, Clone, Default)]
pub struct PersistentStore<S> {
    inner: S,
}

impl<S: KeyValueStore> PersistentStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Parse the entry under `key`. An empty string counts as absent.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(raw) = self.inner.get_item(key)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Deserialize {
                key: key.to_string(),
                source,
            })
    }

    /// Load `key`, falling back to `T::default()` when absent, unreadable or
    /// malformed.
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("no stored value for '{}', using default", key);
                T::default()
            }
            Err(e) => {
                warn!("{}, using default: {}", e, source_message(&e));
                T::default()
            }
        }
    }

    pub fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.inner.set_item(key, &raw)
    }

    /// Best-effort save; failures are logged and dropped.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            warn!("{}: {}", e, source_message(&e));
        }
    }
}

fn source_message(err: &StoreError) -> String {
    std::error::Error::source(err)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Habit, StreakMap};

    #[test]
    fn test_missing_key_loads_default() {
        let store = PersistentStore::new(MemoryStore::new());
        let habits: Vec<Habit> = store.load("habits");
        assert!(habits.is_empty());
    }

    #[test]
    fn test_empty_string_counts_as_absent() {
        let mem = MemoryStore::new();
        mem.insert_raw("habits", "");
        let store = PersistentStore::new(mem);
        assert!(store.try_load::<Vec<Habit>>("habits").unwrap().is_none());
    }

    #[test]
    fn test_malformed_data_loads_default() {
        let mem = MemoryStore::new();
        mem.insert_raw("habits", "[{not json");
        mem.insert_raw("streak", "null");
        let store = PersistentStore::new(mem);

        assert!(matches!(
            store.try_load::<Vec<Habit>>("habits"),
            Err(StoreError::Deserialize { .. })
        ));
        let habits: Vec<Habit> = store.load("habits");
        let streaks: StreakMap = store.load("streak");
        assert!(habits.is_empty());
        assert!(streaks.is_empty());
    }

    #[test]
    fn test_unavailable_store_never_panics() {
        let mem = MemoryStore::new();
        mem.insert_raw("habits", r#"[{"id":1,"name":"a","completed":false}]"#);
        mem.set_available(false);
        let store = PersistentStore::new(mem.clone());

        let habits: Vec<Habit> = store.load("habits");
        assert!(habits.is_empty());

        store.save("habits", &Vec::<Habit>::new());
        assert!(matches!(
            store.try_save("habits", &Vec::<Habit>::new()),
            Err(StoreError::Unavailable(_))
        ));
        // The failed save left the old value in place
        assert!(mem.raw("habits").unwrap().contains("\"a\""));
    }

    #[test]
    fn test_save_then_load() {
        let store = PersistentStore::new(MemoryStore::new());
        let habits = vec![Habit::new(1, "Stretch"), Habit::new(2, "Journal")];
        store.save("habits", &habits);
        let loaded: Vec<Habit> = store.load("habits");
        assert_eq!(loaded, habits);
    }

    #[test]
    fn test_storage_keys_partial_config() {
        let keys: StorageKeys = serde_json::from_str(r#"{"habits":"h2"}"#).unwrap();
        assert_eq!(keys.habits, "h2");
        assert_eq!(keys.streak, "streak");
    }
}
