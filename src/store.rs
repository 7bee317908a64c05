//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: the controller,
//! the draft text and the tips flag are separate fields, so typing in the
//! input does not re-render the habit list.

use habit_core::{Clock, HabitId, HabitRow, HabitTracker, KeyValueStore, Progress, StorageKeys};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::web_storage::WebStorage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Habit list and streak map, mirrored to localStorage
    pub tracker: HabitTracker<WebStorage>,
    /// Text of the add-habit input (not persisted)
    pub draft: String,
    /// Tips panel expanded (not persisted)
    pub show_tips: bool,
}

impl AppState {
    pub fn open(keys: StorageKeys) -> Self {
        Self {
            tracker: HabitTracker::open(WebStorage, keys),
            draft: String::new(),
            show_tips: false,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_rows(store: &AppStore) -> Vec<HabitRow> {
    store.tracker().with(|tracker| tracker.rows())
}

pub fn store_progress(store: &AppStore) -> Progress {
    store.tracker().with(|tracker| tracker.progress())
}

pub fn store_draft(store: &AppStore) -> String {
    store.draft().get()
}

pub fn store_set_draft(store: &AppStore, text: String) {
    store.draft().set(text);
}

/// Add `draft` as a new habit. The draft is cleared only when accepted.
pub fn submit_draft<S: KeyValueStore, C: Clock>(
    tracker: &mut HabitTracker<S, C>,
    draft: &mut String,
) -> Option<HabitId> {
    let id = tracker.add(draft)?;
    draft.clear();
    Some(id)
}

pub fn store_submit_draft(store: &AppStore) {
    let mut draft = store.draft().get_untracked();
    let accepted = {
        let tracker_field = store.tracker();
        let mut tracker = tracker_field.write();
        submit_draft(&mut *tracker, &mut draft).is_some()
    };
    if accepted {
        store.draft().set(draft);
    }
}

pub fn store_toggle_habit(store: &AppStore, id: HabitId) {
    store.tracker().write().toggle(id);
}

pub fn store_delete_habit(store: &AppStore, id: HabitId) {
    store.tracker().write().delete(id);
}

pub fn store_tips_shown(store: &AppStore) -> bool {
    store.show_tips().get()
}

pub fn store_toggle_tips(store: &AppStore) {
    store.show_tips().update(|shown| *shown = !*shown);
}
