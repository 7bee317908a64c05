//! UI Components
//!
//! Leptos components of the habit page.

mod habit_item;
mod new_habit_form;
mod progress_bar;
mod tips_panel;

pub use habit_item::HabitItem;
pub use new_habit_form::NewHabitForm;
pub use progress_bar::ProgressBar;
pub use tips_panel::TipsPanel;
