//! Sidebar highlighting for the current page

use crate::dom;

pub const NAV_LINK_SELECTOR: &str = ".sidebar .nav-link";

/// A link is active when its `href` is exactly the current path
pub fn is_active(href: Option<&str>, path: &str) -> bool {
    href == Some(path)
}

/// Highlight the link for `location.pathname`
pub fn highlight_active() -> usize {
    highlight_for(&dom::current_path())
}

/// Set the `active` class on links matching `path` and clear it elsewhere
///
/// Returns the number of active links. Running it again changes nothing.
pub fn highlight_for(path: &str) -> usize {
    let mut active = 0;

    for link in dom::query_all(NAV_LINK_SELECTOR) {
        let on = is_active(link.get_attribute("href").as_deref(), path);
        let _ = link.class_list().toggle_with_force("active", on);
        if on {
            active += 1;
        }
    }

    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(is_active(Some("/orders"), "/orders"));
        assert!(!is_active(Some("/orders"), "/"));
        assert!(!is_active(Some("/"), "/orders"));
        assert!(!is_active(None, "/"));
    }
}
