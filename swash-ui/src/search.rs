//! Search-as-you-type table filtering
//!
//! Every keystroke rescans the whole table; there is no debounce.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, Event, HtmlInputElement};

use crate::dom;

/// Text inputs whose placeholder mentions "search", in any case
pub const SEARCH_INPUT_SELECTOR: &str = r#"input[type="text"][placeholder*="search" i]"#;

/// Ancestors that scope a search box to its table
const SEARCH_SCOPE_SELECTOR: &str = ".container-fluid, .row";

/// Case-insensitive substring match of `term` against a row's text
pub fn row_matches(row_text: &str, term: &str) -> bool {
    row_text.to_lowercase().contains(&term.to_lowercase())
}

/// Visibility of each row for `term`; an empty term shows every row
pub fn visibility<'a, I>(rows: I, term: &str) -> Vec<bool>
where
    I: IntoIterator<Item = &'a str>,
{
    rows.into_iter().map(|row| row_matches(row, term)).collect()
}

/// Wire every search input on the page to its table
pub fn attach() -> usize {
    let mut attached = 0;

    for element in dom::query_all(SEARCH_INPUT_SELECTOR) {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };

        let target = input.clone();
        let on_input = Closure::wrap(Box::new(move |_event: Event| {
            filter_table_for(&target, &target.value());
        }) as Box<dyn FnMut(Event)>);

        if input
            .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
            .is_ok()
        {
            attached += 1;
        }
        on_input.forget();
    }

    attached
}

/// Filter the table that shares a container with `input`
///
/// Returns the number of rows left visible.
pub fn filter_table_for(input: &Element, term: &str) -> usize {
    let table = input
        .closest(SEARCH_SCOPE_SELECTOR)
        .ok()
        .flatten()
        .and_then(|scope| scope.query_selector("table").ok().flatten());

    match table {
        Some(table) => filter_rows(&table, term),
        None => 0,
    }
}

/// Show body rows containing `term`, hide the rest
pub fn filter_rows(table: &Element, term: &str) -> usize {
    let term = term.to_lowercase();
    let mut visible = 0;

    for row in dom::query_all_in(table, "tbody tr") {
        let show = row_matches(&row.text_content().unwrap_or_default(), &term);
        dom::set_visible(&row, show);
        if show {
            visible += 1;
        }
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_matches_ignores_case() {
        assert!(row_matches("1 John Doe john@example.com", "JOHN"));
        assert!(row_matches("Dry Cleaning", "dry cl"));
        assert!(!row_matches("Laundry", "alter"));
    }

    #[test]
    fn test_only_matching_row_stays_visible() {
        let rows = ["John Doe Dry Cleaning", "Jane Smith Laundry", "Bob Johnson Alterations"];

        assert_eq!(visibility(rows, "laundry"), vec![false, true, false]);
    }

    #[test]
    fn test_empty_term_shows_everything() {
        let rows = ["a", "b", "c", "d"];

        assert_eq!(visibility(rows, "zzz"), vec![false; 4]);
        assert_eq!(visibility(rows, ""), vec![true; 4]);
    }
}
