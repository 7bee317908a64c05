//! Tracker Configuration
//!
//! Read once at startup from the `discipline.config` entry of the same
//! key-value store. Every field is optional in the stored JSON.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::StoreError;
use crate::storage::{KeyValueStore, PersistentStore, StorageKeys};

/// Store key holding the JSON configuration
pub const CONFIG_KEY: &str = "discipline.config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Keys of the persisted habit list and streak map
    pub keys: StorageKeys,
    /// Level name understood by `log` ("error" .. "trace", "off")
    pub log_level: String,
    /// Number of log records kept in the in-memory ring buffer
    pub log_capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            log_level: "info".to_string(),
            log_capacity: 200,
        }
    }
}

impl TrackerConfig {
    /// Load from `CONFIG_KEY`, defaults on absence or malformed JSON.
    ///
    /// The config is read before any logger exists, so a failure is handed
    /// back to the caller instead of being logged here.
    pub fn load<S: KeyValueStore>(store: &PersistentStore<S>) -> (Self, Option<StoreError>) {
        match store.try_load(CONFIG_KEY) {
            Ok(config) => (config.unwrap_or_default(), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }
}
