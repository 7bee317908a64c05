//! Discipline Builder Frontend Entry Point

mod app;
mod components;
mod debug;
mod store;
mod web_storage;

use app::App;
use habit_core::{PersistentStore, TrackerConfig};
use leptos::prelude::*;
use web_storage::WebStorage;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = TrackerConfig::load(&PersistentStore::new(WebStorage));
    match rolling_logger::init(config.level_filter(), config.log_capacity) {
        Ok(logger) => debug::expose_log_history(logger),
        Err(e) => web_sys::console::warn_1(&format!("logger not installed: {}", e).into()),
    }
    if let Some(e) = config_error {
        log::warn!("{}, using default config", e);
    }
    log::info!("starting with storage keys {:?}", config.keys);

    mount_to_body(move || view! { <App config=config /> });
}
