//! Domain Model
//!
//! Data structures persisted to the key-value store and the derived values
//! the view renders from them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Habit identifier: creation time in milliseconds.
pub type HabitId = u64;

/// Toggle counter per habit id. Serialized as a JSON object whose keys are
/// the stringified ids.
pub type StreakMap = BTreeMap<HabitId, u32>;

/// A tracked habit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier
    pub id: HabitId,
    /// Trimmed, non-empty display name
    pub name: String,
    /// Completed today
    pub completed: bool,
}

impl Habit {
    /// Create a new, not yet completed habit
    pub fn new(id: HabitId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

/// Completion summary, recomputed on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn from_habits(habits: &[Habit]) -> Self {
        Self {
            completed: habits.iter().filter(|h| h.completed).count(),
            total: habits.len(),
        }
    }

    /// Completed share in percent, `None` while the list is empty.
    pub fn percent(&self) -> Option<f64> {
        (self.total > 0).then(|| self.completed as f64 / self.total as f64 * 100.0)
    }

    /// The progress section is only rendered for a non-empty list.
    pub fn is_visible(&self) -> bool {
        self.total > 0
    }

    pub fn label(&self) -> String {
        format!("{} of {} completed today", self.completed, self.total)
    }
}

/// One rendered row of the habit list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HabitRow {
    pub id: HabitId,
    pub name: String,
    pub completed: bool,
    /// Badge value; only set for a non-zero streak entry
    pub streak: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_habit_creation() {
        let habit = Habit::new(7, "Read");
        assert_eq!(habit.id, 7);
        assert_eq!(habit.name, "Read");
        assert!(!habit.completed);
    }

    #[test]
    fn test_habit_json_shape() {
        let habit = Habit::new(1700000000000, "Drink water");
        let json = serde_json::to_string(&habit).unwrap();
        assert_eq!(json, r#"{"id":1700000000000,"name":"Drink water","completed":false}"#);
    }

    #[test]
    fn test_streak_map_keys_are_strings() {
        let mut streaks = StreakMap::new();
        streaks.insert(1700000000000, 2);
        let json = serde_json::to_string(&streaks).unwrap();
        assert_eq!(json, r#"{"1700000000000":2}"#);
        let back: StreakMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, streaks);
    }

    #[test]
    fn test_progress_empty_has_no_percent() {
        let progress = Progress::from_habits(&[]);
        assert_eq!(progress.percent(), None);
        assert!(!progress.is_visible());
    }

    #[test]
    fn test_progress_one_third() {
        let mut habits = vec![Habit::new(1, "a"), Habit::new(2, "b"), Habit::new(3, "c")];
        habits[1].completed = true;
        let progress = Progress::from_habits(&habits);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.total, 3);
        let pct = progress.percent().unwrap();
        assert!((pct - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(progress.label(), "1 of 3 completed today");
    }
}
