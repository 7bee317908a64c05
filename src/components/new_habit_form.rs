//! New Habit Form Component
//!
//! Text input plus "Add" button; Enter submits too.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::store::{store_draft, store_set_draft, store_submit_draft, use_app_store};

#[component]
pub fn NewHabitForm() -> impl IntoView {
    let store = use_app_store();

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            store_submit_draft(&store);
        }
    };

    view! {
        <div class="input-section">
            <input
                type="text"
                class="input"
                placeholder="Add a new habit..."
                prop:value=move || store_draft(&store)
                on:input=move |ev| store_set_draft(&store, event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="add-button" on:click=move |_| store_submit_draft(&store)>
                "Add"
            </button>
        </div>
    }
}
