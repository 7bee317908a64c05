//! Discipline Builder App
//!
//! Root component: header, input row, progress, habit list, tips, footer.

use habit_core::TrackerConfig;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{HabitItem, NewHabitForm, ProgressBar, TipsPanel};
use crate::store::{store_rows, AppState};

#[component]
pub fn App(config: TrackerConfig) -> impl IntoView {
    let store = Store::new(AppState::open(config.keys));

    // Provide the store to all children
    provide_context(store);

    view! {
        <div class="container">
            <header class="header">
                <h1>"🎯 Discipline Builder"</h1>
                <p>"Build lasting habits, one day at a time"</p>
            </header>

            <div class="main">
                <NewHabitForm />

                <ProgressBar />

                <div class="habit-list">
                    // Keyed by full row content so a toggle re-renders the row
                    <For
                        each=move || store_rows(&store)
                        key=|row| row.clone()
                        children=move |row| view! { <HabitItem row=row /> }
                    />
                </div>

                <TipsPanel />
            </div>

            <footer class="footer">
                <p>"Discipline is choosing between what you want now and what you want most."</p>
            </footer>
        </div>
    }
}
