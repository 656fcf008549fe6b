//! Placeholder Sections
//!
//! Portal areas that exist in the navigation but have no data yet. They all
//! share one "coming soon" view.

/// A placeholder section reachable at `/<slug>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub slug: &'static str,
    /// Bootstrap icon class
    pub icon: &'static str,
}

impl Section {
    const fn new(slug: &'static str, icon: &'static str) -> Self {
        Self { slug, icon }
    }

    /// Display title derived from the slug
    pub fn title(&self) -> String {
        section_title(self.slug)
    }

    /// Route path
    pub fn path(&self) -> String {
        format!("/{}", self.slug)
    }
}

/// Every placeholder section, in navigation order
pub const SECTIONS: &[Section] = &[
    Section::new("sms", "bi-chat-dots"),
    Section::new("receipts", "bi-receipt"),
    Section::new("issues", "bi-exclamation-triangle"),
    Section::new("vendors", "bi-shop"),
    Section::new("routes", "bi-signpost-split"),
    Section::new("cleaner-tickets", "bi-ticket-perforated"),
    Section::new("work-items", "bi-list-check"),
    Section::new("garment-finder", "bi-search"),
    Section::new("receive-garments", "bi-box-arrow-in-down"),
    Section::new("valet-feedback", "bi-chat-square-text"),
    Section::new("internal-feedback-tools", "bi-tools"),
    Section::new("delivery-prep", "bi-box-seam"),
    Section::new("payments", "bi-credit-card"),
    Section::new("dispatch", "bi-truck"),
    Section::new("bag-tags", "bi-tags"),
    Section::new("racks", "bi-grid-3x3"),
    Section::new("scans", "bi-upc-scan"),
    Section::new("rack-load-out", "bi-box-arrow-right"),
    Section::new("rack-load-in", "bi-box-arrow-in-left"),
    Section::new("admin", "bi-gear"),
    Section::new("email-previews", "bi-envelope"),
    Section::new("sop-guide", "bi-journal-text"),
    Section::new("hr", "bi-people"),
];

/// Look up a section by slug
pub fn find(slug: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.slug == slug)
}

/// Uppercase the first character and turn every `-` into a space
///
/// Only the first word is capitalized: `cleaner-tickets` becomes `Cleaner tickets`.
pub fn section_title(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>().replace('-', " "),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_count() {
        assert_eq!(SECTIONS.len(), 23);
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<_> = SECTIONS.iter().map(|s| s.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SECTIONS.len());
    }

    #[test]
    fn test_section_title() {
        assert_eq!(section_title("sms"), "Sms");
        assert_eq!(section_title("hr"), "Hr");
        assert_eq!(section_title("cleaner-tickets"), "Cleaner tickets");
        assert_eq!(section_title("internal-feedback-tools"), "Internal feedback tools");
        assert_eq!(section_title(""), "");
    }

    #[test]
    fn test_find() {
        let section = find("rack-load-out").unwrap();
        assert_eq!(section.path(), "/rack-load-out");
        assert_eq!(section.title(), "Rack load out");

        assert!(find("customers").is_none());
        assert!(find("unknown").is_none());
    }
}
