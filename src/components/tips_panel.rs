//! Tips Panel Component
//!
//! Collapsible list of static discipline tips.

use leptos::prelude::*;

use crate::store::{store_tips_shown, store_toggle_tips, use_app_store};

pub struct Tip {
    pub title: &'static str,
    pub body: &'static str,
}

pub static TIPS: [Tip; 6] = [
    Tip {
        title: "Start Small",
        body: "Begin with tiny habits that take less than 2 minutes. Success breeds motivation.",
    },
    Tip {
        title: "Same Time, Same Place",
        body: "Build routines by doing habits at consistent times and locations.",
    },
    Tip {
        title: "Never Break the Chain",
        body: "Focus on consistency over perfection. Even 1% effort counts.",
    },
    Tip {
        title: "Remove Friction",
        body: "Make good habits easy and bad habits hard. Design your environment.",
    },
    Tip {
        title: "Track Your Progress",
        body: "What gets measured gets managed. Use this tracker daily.",
    },
    Tip {
        title: "Identity-Based",
        body: "Don't just do it—become the type of person who does it.",
    },
];

fn toggle_label(shown: bool) -> &'static str {
    if shown {
        "− Hide Tips"
    } else {
        "+ Show Discipline Tips"
    }
}

#[component]
pub fn TipsPanel() -> impl IntoView {
    let store = use_app_store();
    let shown = move || store_tips_shown(&store);

    view! {
        <button class="tips-button" on:click=move |_| store_toggle_tips(&store)>
            {move || toggle_label(shown())}
        </button>

        <Show when=shown>
            <div class="tips-section">
                <h2>"Keys to Building Discipline"</h2>
                <div class="tips">
                    {TIPS.iter().enumerate().map(|(i, tip)| view! {
                        <div class="tip">
                            <h3>{format!("{}. {}", i + 1, tip.title)}</h3>
                            <p>{tip.body}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </Show>
    }
}
