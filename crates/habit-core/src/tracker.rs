//! Habit Tracker
//!
//! The controller: owns the habit list and streak map, mirrors every
//! mutation to the injected store.

use log::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::model::{Habit, HabitId, HabitRow, Progress, StreakMap};
use crate::storage::{KeyValueStore, PersistentStore, StorageKeys};

/// In-memory habit list and streak map backed by a key-value store.
///
/// The in-memory copy is authoritative; each mutation overwrites the stored
/// entries wholesale.
#[derive(Debug, Clone)]
pub struct HabitTracker<S, C = SystemClock> {
    habits: Vec<Habit>,
    streaks: StreakMap,
    store: PersistentStore<S>,
    keys: StorageKeys,
    clock: C,
}

impl<S: KeyValueStore> HabitTracker<S, SystemClock> {
    /// Open with the wall clock
    pub fn open(store: S, keys: StorageKeys) -> Self {
        Self::with_clock(store, keys, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> HabitTracker<S, C> {
    /// Load both entries from `store`; missing or malformed data yields an
    /// empty tracker.
    pub fn with_clock(store: S, keys: StorageKeys, clock: C) -> Self {
        let store = PersistentStore::new(store);
        let habits: Vec<Habit> = store.load(&keys.habits);
        let streaks: StreakMap = store.load(&keys.streak);
        info!("loaded {} habits, {} streak entries", habits.len(), streaks.len());
        Self {
            habits,
            streaks,
            store,
            keys,
            clock,
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn streaks(&self) -> &StreakMap {
        &self.streaks
    }

    /// Streak counter for `id`, `None` for absent or zero entries
    pub fn streak(&self, id: HabitId) -> Option<u32> {
        self.streaks.get(&id).copied().filter(|n| *n > 0)
    }

    pub fn store(&self) -> &PersistentStore<S> {
        &self.store
    }

    /// Append a habit named `name` (trimmed). Returns the new id, or `None`
    /// when the trimmed name is empty.
    pub fn add(&mut self, name: &str) -> Option<HabitId> {
        let name = name.trim();
        if name.is_empty() {
            debug!("ignoring add with empty name");
            return None;
        }
        let id = self.next_id();
        self.habits.push(Habit::new(id, name));
        self.save_habits();
        info!("added habit {} '{}'", id, name);
        Some(id)
    }

    /// Flip `completed` for `id` and bump its streak counter. Returns the new
    /// completed value, or `None` for an unknown id.
    pub fn toggle(&mut self, id: HabitId) -> Option<bool> {
        let habit = self.habits.iter_mut().find(|h| h.id == id)?;
        habit.completed = !habit.completed;
        let completed = habit.completed;
        self.save_habits();

        // Counts toggles in both directions, not consecutive days
        let count = self.streaks.entry(id).or_insert(0);
        *count = count.saturating_add(1);
        let count = *count;
        self.save_streaks();

        debug!("toggled habit {} -> completed={}, streak={}", id, completed, count);
        Some(completed)
    }

    /// Remove the habit `id`. Its streak entry stays in the map.
    pub fn delete(&mut self, id: HabitId) -> Option<Habit> {
        let index = self.habits.iter().position(|h| h.id == id)?;
        let removed = self.habits.remove(index);
        self.save_habits();
        info!("deleted habit {} '{}'", removed.id, removed.name);
        Some(removed)
    }

    pub fn progress(&self) -> Progress {
        Progress::from_habits(&self.habits)
    }

    /// Display rows in list order
    pub fn rows(&self) -> Vec<HabitRow> {
        self.habits
            .iter()
            .map(|h| HabitRow {
                id: h.id,
                name: h.name.clone(),
                completed: h.completed,
                streak: self.streak(h.id),
            })
            .collect()
    }

    /// Creation timestamp, bumped past the largest existing id when the
    /// clock would repeat or go backwards.
    fn next_id(&self) -> HabitId {
        let now = HabitId::try_from(self.clock.now_millis()).unwrap_or(0);
        match self.habits.iter().map(|h| h.id).max() {
            Some(max) if now <= max => max.saturating_add(1),
            _ => now,
        }
    }

    fn save_habits(&self) {
        self.store.save(&self.keys.habits, &self.habits);
    }

    fn save_streaks(&self) {
        self.store.save(&self.keys.streak, &self.streaks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::storage::MemoryStore;

    fn setup() -> (HabitTracker<MemoryStore, ManualClock>, MemoryStore, ManualClock) {
        let mem = MemoryStore::new();
        let clock = ManualClock::new(1_700_000_000_000);
        let tracker = HabitTracker::with_clock(mem.clone(), StorageKeys::default(), clock.clone());
        (tracker, mem, clock)
    }

    #[test]
    fn test_add_trims_and_appends() {
        let (mut tracker, _, clock) = setup();
        let first = tracker.add("  Meditate ").unwrap();
        clock.advance(10);
        let second = tracker.add("Run").unwrap();

        let names: Vec<_> = tracker.habits().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Meditate", "Run"]);
        assert_eq!(first, 1_700_000_000_000);
        assert_eq!(second, 1_700_000_000_010);
        assert!(tracker.habits().iter().all(|h| !h.completed));
    }

    #[test]
    fn test_add_empty_is_rejected() {
        let (mut tracker, mem, _) = setup();
        assert_eq!(tracker.add(""), None);
        assert_eq!(tracker.add("   "), None);
        assert!(tracker.habits().is_empty());
        assert_eq!(mem.raw("habits"), None);
    }

    #[test]
    fn test_same_millisecond_ids_stay_unique() {
        let (mut tracker, _, clock) = setup();
        let a = tracker.add("a").unwrap();
        let b = tracker.add("b").unwrap();
        clock.set(5);
        let c = tracker.add("c").unwrap();
        assert_eq!(b, a + 1);
        assert_eq!(c, b + 1);
    }

    #[test]
    fn test_toggle_counts_both_directions() {
        let (mut tracker, mem, _) = setup();
        let id = tracker.add("Read").unwrap();

        assert_eq!(tracker.toggle(id), Some(true));
        assert_eq!(tracker.streak(id), Some(1));
        assert_eq!(tracker.toggle(id), Some(false));
        assert_eq!(tracker.streak(id), Some(2));
        assert!(!tracker.habits()[0].completed);
        assert_eq!(mem.raw("streak").unwrap(), format!(r#"{{"{}":2}}"#, id));
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let (mut tracker, mem, _) = setup();
        tracker.add("Read").unwrap();
        let before = mem.raw("habits");

        assert_eq!(tracker.toggle(42), None);
        assert!(tracker.streaks().is_empty());
        assert_eq!(mem.raw("streak"), None);
        assert_eq!(mem.raw("habits"), before);
    }

    #[test]
    fn test_delete_keeps_streak_entry() {
        let (mut tracker, mem, clock) = setup();
        let keep = tracker.add("Keep").unwrap();
        clock.advance(1);
        let gone = tracker.add("Gone").unwrap();
        tracker.toggle(gone);

        let removed = tracker.delete(gone).unwrap();
        assert_eq!(removed.name, "Gone");
        assert_eq!(tracker.habits().len(), 1);
        assert_eq!(tracker.habits()[0].id, keep);
        assert_eq!(tracker.streaks().get(&gone), Some(&1));
        assert!(mem.raw("streak").unwrap().contains(&gone.to_string()));
        assert_eq!(tracker.delete(gone), None);
    }

    #[test]
    fn test_rows_badge_only_for_nonzero_streaks() {
        let mem = MemoryStore::new();
        mem.insert_raw(
            "habits",
            r#"[{"id":1,"name":"a","completed":true},{"id":2,"name":"b","completed":false},{"id":3,"name":"c","completed":false}]"#,
        );
        mem.insert_raw("streak", r#"{"1":3,"2":0}"#);
        let tracker = HabitTracker::with_clock(mem, StorageKeys::default(), ManualClock::new(0));

        let badges: Vec<_> = tracker.rows().iter().map(|r| r.streak).collect();
        assert_eq!(badges, [Some(3), None, None]);
        assert!(tracker.rows()[0].completed);
    }

    #[test]
    fn test_custom_keys() {
        let mem = MemoryStore::new();
        let keys = StorageKeys {
            habits: "h".to_string(),
            streak: "s".to_string(),
        };
        let mut tracker = HabitTracker::with_clock(mem.clone(), keys, ManualClock::new(9));
        tracker.add("x");
        tracker.toggle(9);
        assert!(mem.raw("h").is_some());
        assert_eq!(mem.raw("s").as_deref(), Some(r#"{"9":1}"#));
        assert_eq!(mem.raw("habits"), None);
    }
}
