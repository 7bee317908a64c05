//! Debug Hooks
//!
//! Exposes the in-memory log history as `window.disciplineLogs()`, callable
//! from the browser devtools console.

use rolling_logger::RollingLogger;
use wasm_bindgen::prelude::*;

const LOG_HOOK: &str = "disciplineLogs";

pub fn expose_log_history(logger: &'static RollingLogger) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let dump = Closure::<dyn Fn() -> String>::new(move || logger.dump());
    match js_sys::Reflect::set(&window, &JsValue::from_str(LOG_HOOK), dump.as_ref()) {
        Ok(_) => log::debug!("log history available as window.{}()", LOG_HOOK),
        Err(e) => log::warn!("failed to expose log history: {:?}", e),
    }
    // The hook lives as long as the page
    dump.forget();
}
