//! Dashboard tile click tracking

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, Event};

use crate::dom;

pub const TILE_SELECTOR: &str = ".tile-link";

/// Record a tile click
pub fn track_tile_click(tile_name: &str) {
    dom::log(&format!("Navigating to: {}", tile_name));
}

/// Text of the tile's label span, or empty
pub fn tile_label(tile: &Element) -> String {
    tile.query_selector("span")
        .ok()
        .flatten()
        .and_then(|span| span.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Log the label of every tile as it is clicked; returns how many were wired
pub fn attach() -> usize {
    let tiles = dom::query_all(TILE_SELECTOR);

    for tile in &tiles {
        let label = tile_label(tile);

        let on_click = Closure::wrap(Box::new(move |_event: Event| {
            track_tile_click(&label);
        }) as Box<dyn FnMut(Event)>);
        let _ = tile.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    tiles.len()
}
