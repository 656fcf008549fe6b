//! DOM helpers shared by the behaviors

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

/// `location.pathname`, or an empty string outside a browser
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// All elements in the document matching `selector`
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(|list| elements(&list))
        .unwrap_or_default()
}

/// All descendants of `root` matching `selector`
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Show or hide an element through its inline `display` style
pub fn set_visible(element: &Element, visible: bool) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let style = el.style();
        let _ = if visible {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
    }
}

pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

pub fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}
