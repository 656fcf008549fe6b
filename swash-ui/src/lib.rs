//! SWASH Dashboard Browser Behaviors
//!
//! Progressive enhancement for the server-rendered admin pages, compiled to
//! WebAssembly and loaded by the layout from `/pkg/swash_ui.js`.
//!
//! # Behaviors
//!
//! - Sidebar highlighting of the current page
//! - Search-as-you-type filtering of data tables
//! - Bootstrap tooltips
//! - Dismissible, self-expiring notifications
//! - 30-second refresh of the dashboard counters
//! - Keyboard shortcuts (Ctrl/Cmd+K, Escape)
//! - Dashboard clock and tile click tracking
//!
//! Each behavior is independent and only touches the DOM it finds.
//!
//! # Building
//!
//! ```text
//! wasm-pack build swash-ui --target web --out-dir ../public/pkg
//! ```

use wasm_bindgen::prelude::*;
use web_sys::HtmlButtonElement;

pub mod api;
pub mod clock;
pub mod dom;
pub mod loading;
pub mod nav;
pub mod notify;
pub mod refresh;
pub mod search;
pub mod shortcuts;
pub mod tiles;
pub mod tooltips;

use notify::NotificationKind;

/// Runs once when the module is instantiated
#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    nav::highlight_active();
    search::attach();
    tooltips::activate();
    tiles::attach();
    shortcuts::install();
    clock::start();
    refresh::start();

    dom::log("SWASH Admin Dashboard loaded");
}

/// Show a notification; `kind` is `info`, `success`, `warning` or `error`
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    let kind = NotificationKind::parse(kind.as_deref().unwrap_or("info"));
    notify::show(message, kind);
}

#[wasm_bindgen(js_name = setLoadingState)]
pub fn set_loading_state(button: &HtmlButtonElement, is_loading: bool) {
    loading::set_loading_state(button, is_loading);
}

#[wasm_bindgen(js_name = trackTileClick)]
pub fn track_tile_click(tile_name: &str) {
    tiles::track_tile_click(tile_name);
}

/// Re-apply sidebar highlighting, e.g. after history navigation
#[wasm_bindgen(js_name = updateActiveNavLink)]
pub fn update_active_nav_link() -> u32 {
    nav::highlight_active() as u32
}

/// Fetch JSON from an endpoint; rejects with the error message
///
/// `options` may carry `method`, `headers` and `body`, as with `fetch`.
#[wasm_bindgen(js_name = apiCall)]
pub async fn api_call(endpoint: String, options: JsValue) -> Result<JsValue, JsValue> {
    let options = api::RequestOptions::from_js(&options).map_err(JsValue::from)?;
    let value: serde_json::Value = api::api_call_with(&endpoint, &options)
        .await
        .map_err(JsValue::from)?;
    js_sys::JSON::parse(&value.to_string())
}
