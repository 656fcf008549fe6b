//! Bootstrap tooltip activation

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::dom;

pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;

/// Construct a `bootstrap.Tooltip` for every flagged element
///
/// Does nothing when the Bootstrap bundle is not loaded.
pub fn activate() -> usize {
    let Some(tooltip) = tooltip_constructor() else {
        dom::log("Bootstrap not loaded, tooltips disabled");
        return 0;
    };

    dom::query_all(TOOLTIP_SELECTOR)
        .iter()
        .filter(|el| Reflect::construct(&tooltip, &Array::of1(el)).is_ok())
        .count()
}

fn tooltip_constructor() -> Option<Function> {
    let window = dom::window()?;
    let bootstrap = Reflect::get(&window, &JsValue::from_str("bootstrap")).ok()?;
    if bootstrap.is_undefined() {
        return None;
    }
    Reflect::get(&bootstrap, &JsValue::from_str("Tooltip"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}
