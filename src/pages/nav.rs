//! Navigation bar model.

/// A link in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub display_name: &'static str,
    pub path: &'static str,
    pub is_active: bool,
}

/// Fixed link catalog, in display order.
const CATALOG: [(&str, &str); 3] = [
    ("Home", "/"),
    ("Our Services", "/services"),
    ("Contact Us", "/contact"),
];

/// Builds the navigation entries, marking the one whose name equals
/// `current_page` (case-sensitive). An unknown or empty label marks none.
pub fn build_nav(current_page: &str) -> Vec<NavEntry> {
    CATALOG
        .iter()
        .map(|&(display_name, path)| NavEntry {
            display_name,
            path,
            is_active: display_name == current_page,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[NavEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.display_name).collect()
    }

    #[test]
    fn test_home_active() {
        let nav = build_nav("Home");
        assert_eq!(names(&nav), ["Home", "Our Services", "Contact Us"]);
        assert_eq!(
            nav.iter().map(|e| e.is_active).collect::<Vec<_>>(),
            [true, false, false]
        );
        assert_eq!(nav[0].path, "/");
    }

    #[test]
    fn test_empty_label_marks_nothing() {
        let nav = build_nav("");
        assert_eq!(names(&nav), ["Home", "Our Services", "Contact Us"]);
        assert!(nav.iter().all(|e| !e.is_active));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(build_nav("contact us").iter().all(|e| !e.is_active));
        let nav = build_nav("Contact Us");
        assert!(nav[2].is_active);
        assert_eq!(nav.iter().filter(|e| e.is_active).count(), 1);
    }
}
