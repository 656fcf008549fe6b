//! Keyboard shortcuts
//!
//! - Ctrl/Cmd + K focuses the first text input
//! - Escape clears every text input and re-runs its input handlers

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, HtmlInputElement, KeyboardEvent};

use crate::dom;

const TEXT_INPUT_SELECTOR: &str = r#"input[type="text"]"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    FocusSearch,
    ClearSearch,
}

impl Shortcut {
    /// Map a key press to a shortcut
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Option<Self> {
        if (ctrl || meta) && key.eq_ignore_ascii_case("k") {
            Some(Shortcut::FocusSearch)
        } else if key == "Escape" {
            Some(Shortcut::ClearSearch)
        } else {
            None
        }
    }
}

/// Listen for shortcuts on the whole document
pub fn install() {
    let Some(doc) = dom::document() else {
        return;
    };

    let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        match Shortcut::from_key(&event.key(), event.ctrl_key(), event.meta_key()) {
            Some(Shortcut::FocusSearch) => {
                event.prevent_default();
                focus_first_text_input();
            }
            Some(Shortcut::ClearSearch) => {
                clear_text_inputs();
            }
            None => {}
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

/// Focus the first text input on the page, if any
pub fn focus_first_text_input() -> bool {
    dom::document()
        .and_then(|doc| doc.query_selector(TEXT_INPUT_SELECTOR).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.focus().is_ok())
        .unwrap_or(false)
}

/// Empty every text input and dispatch `input` so filters reset
pub fn clear_text_inputs() -> usize {
    let mut cleared = 0;

    for element in dom::query_all(TEXT_INPUT_SELECTOR) {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        input.set_value("");
        if let Ok(event) = Event::new("input") {
            let _ = input.dispatch_event(&event);
        }
        cleared += 1;
    }

    cleared
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_shortcut_needs_modifier() {
        assert_eq!(Shortcut::from_key("k", true, false), Some(Shortcut::FocusSearch));
        assert_eq!(Shortcut::from_key("k", false, true), Some(Shortcut::FocusSearch));
        assert_eq!(Shortcut::from_key("K", true, false), Some(Shortcut::FocusSearch));
        assert_eq!(Shortcut::from_key("k", false, false), None);
    }

    #[test]
    fn test_escape_clears() {
        assert_eq!(Shortcut::from_key("Escape", false, false), Some(Shortcut::ClearSearch));
        assert_eq!(Shortcut::from_key("Escape", true, false), Some(Shortcut::ClearSearch));
        assert_eq!(Shortcut::from_key("Enter", false, false), None);
    }
}
