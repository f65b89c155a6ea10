//! Shared page layout.

use crate::pages::document::{BodyRegion, Fragment, Head, HtmlDocument};
use crate::pages::nav::build_nav;

pub const BRAND: &str = "TechCorp";

const FOOTER: Fragment = Fragment::from_static(
    "&copy; 2025 TechCorp. All rights reserved. Available Monday-Friday, 9 AM - 5 PM.",
);

/// Wraps `content` in the site layout: head with `title`, navigation bar with
/// `current_page` highlighted, the content verbatim in `main`, then the footer.
pub fn compose(title: &str, content: Fragment, current_page: &str) -> HtmlDocument {
    HtmlDocument::new(
        Head::new(title),
        vec![
            BodyRegion::Navbar {
                brand: BRAND,
                entries: build_nav(current_page),
            },
            BodyRegion::Main(content),
            BodyRegion::Footer(FOOTER),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_places_title_and_content() {
        let doc = compose("X", Fragment::from_static("<p>hi</p>"), "Contact Us");
        let html = doc.render();

        let head_end = html.find("</head>").unwrap();
        let title = html.find("<title>X</title>").unwrap();
        assert!(title < head_end);

        let main_start = html.find("<main").unwrap();
        let main_end = html.find("</main>").unwrap();
        let content = html.find("<p>hi</p>").unwrap();
        assert!(main_start < content && content < main_end);

        assert!(html.contains("<a href=\"/contact\" class=\"active\">Contact Us</a>"));
        assert!(html.contains("<a href=\"/\" class=\"\">Home</a>"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose("X", Fragment::from_static("<p>hi</p>"), "Home");
        let b = compose("X", Fragment::from_static("<p>hi</p>"), "Home");
        assert_eq!(a, b);
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_footer_present() {
        let html = compose("X", Fragment::from_static(""), "").render();
        assert!(html.contains("&copy; 2025 TechCorp. All rights reserved."));
        assert!(html.contains("<h2>TechCorp</h2>"));
    }
}
