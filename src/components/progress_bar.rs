//! Progress Bar Component

use leptos::prelude::*;

use crate::store::{store_progress, use_app_store};

/// Inline style of the fill element
fn fill_style(percent: f64) -> String {
    format!("width: {}%", percent)
}

/// Completed/total bar, hidden while there are no habits
#[component]
pub fn ProgressBar() -> impl IntoView {
    let store = use_app_store();
    let progress = move || store_progress(&store);

    view! {
        <Show when=move || progress().is_visible()>
            <div class="progress">
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        style=move || fill_style(progress().percent().unwrap_or(0.0))
                    ></div>
                </div>
                <p>{move || progress().label()}</p>
            </div>
        </Show>
    }
}
