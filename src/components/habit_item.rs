//! Habit Item Component
//!
//! One row: checkbox, name, streak badge, delete button.

use habit_core::HabitRow;
use leptos::prelude::*;

use crate::store::{store_delete_habit, store_toggle_habit, use_app_store};

fn row_class(completed: bool) -> &'static str {
    if completed {
        "habit-item completed"
    } else {
        "habit-item"
    }
}

#[component]
pub fn HabitItem(row: HabitRow) -> impl IntoView {
    let store = use_app_store();
    let id = row.id;

    view! {
        <div class=row_class(row.completed)>
            <input
                type="checkbox"
                class="checkbox"
                prop:checked=row.completed
                on:change=move |_| store_toggle_habit(&store, id)
            />
            <span class="habit-name">{row.name}</span>
            {row.streak.map(|count| view! {
                <span class="streak">{format!("🔥 {}", count)}</span>
            })}
            <button class="delete-button" on:click=move |_| store_delete_habit(&store, id)>
                "×"
            </button>
        </div>
    }
}
