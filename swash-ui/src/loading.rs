//! Button loading state

use web_sys::HtmlButtonElement;

const ORIGINAL_TEXT_KEY: &str = "originalText";

const LOADING_HTML: &str = r#"<span class="loading"></span> Loading..."#;

/// Disable a button and show a spinner, or restore it
///
/// The label is saved in `data-original-text` on the way in and put back on
/// the way out, whether or not the button was already disabled. Repeated
/// calls with `true` keep the first saved label.
pub fn set_loading_state(button: &HtmlButtonElement, is_loading: bool) {
    let dataset = button.dataset();

    if is_loading {
        if dataset.get(ORIGINAL_TEXT_KEY).is_none() {
            let original = button.text_content().unwrap_or_default();
            let _ = dataset.set(ORIGINAL_TEXT_KEY, &original);
        }
        button.set_disabled(true);
        button.set_inner_html(LOADING_HTML);
    } else {
        button.set_disabled(false);
        // Never loaded: leave the current label alone
        if let Some(original) = dataset.get(ORIGINAL_TEXT_KEY) {
            button.set_text_content(Some(&original));
            dataset.delete(ORIGINAL_TEXT_KEY);
        }
    }
}
