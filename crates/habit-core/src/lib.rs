//! Habit Core
//!
//! Domain model, persistence seam and controller for the Discipline Builder
//! widget. Nothing in here touches the browser: the UI injects a
//! `KeyValueStore` backed by `localStorage`, tests inject `MemoryStore`.

mod clock;
mod config;
mod error;
mod model;
mod storage;
mod tracker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{TrackerConfig, CONFIG_KEY};
pub use error::{StoreError, StoreResult};
pub use model::{Habit, HabitId, HabitRow, Progress, StreakMap};
pub use storage::{KeyValueStore, MemoryStore, PersistentStore, StorageKeys};
pub use tracker::HabitTracker;
