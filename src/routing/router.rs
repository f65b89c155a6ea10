//! Route lookup.
//!
//! # Responsibilities
//! - Store the content routes in priority order
//! - Resolve a method and path to a page, falling back to not-found
//! - Render the resolved page with its status code
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - First match wins
//! - Explicit NotFound rather than an Option

use axum::http::{Method, StatusCode};

use crate::pages::{compose, content, HtmlDocument};
use crate::routing::matcher::{AndMatcher, GetMatcher, Matcher, PathMatcher};

/// Every page the router can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Services,
    Contact,
    NotFound,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home - TechCorp",
            Page::Services => "Our Services - TechCorp",
            Page::Contact => "Contact Us - TechCorp",
            Page::NotFound => "Page Not Found - TechCorp",
        }
    }

    /// Navigation label highlighted on this page. Empty when none applies.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Services => "Our Services",
            Page::Contact => "Contact Us",
            Page::NotFound => "",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Page::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::OK,
        }
    }

    /// Short name used in logs and metric labels.
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Services => "services",
            Page::Contact => "contact",
            Page::NotFound => "not_found",
        }
    }

    pub fn render(&self) -> (StatusCode, HtmlDocument) {
        let fragment = match self {
            Page::Home => content::HOME,
            Page::Services => content::SERVICES,
            Page::Contact => content::CONTACT,
            Page::NotFound => content::NOT_FOUND,
        };
        (self.status(), compose(self.title(), fragment, self.nav_label()))
    }
}

/// A page and the conditions that select it.
#[derive(Debug)]
pub struct Route {
    pub page: Page,
    matcher: Box<dyn Matcher>,
}

impl Route {
    /// A GET (and HEAD) route on an exact path.
    pub fn get(path: &str, page: Page) -> Self {
        Self {
            page,
            matcher: Box::new(AndMatcher::new(vec![
                Box::new(GetMatcher),
                Box::new(PathMatcher::new(path)),
            ])),
        }
    }

    pub fn matches(&self, method: &Method, path: &str) -> bool {
        self.matcher.matches(method, path)
    }
}

/// The site's route table.
#[derive(Debug)]
pub struct SiteRouter {
    routes: Vec<Route>,
}

impl SiteRouter {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Home, services and contact.
    pub fn site() -> Self {
        Self::new(vec![
            Route::get("/", Page::Home),
            Route::get("/services", Page::Services),
            Route::get("/contact", Page::Contact),
        ])
    }

    /// Find the page for a request. Anything unmatched is [`Page::NotFound`].
    pub fn resolve(&self, method: &Method, path: &str) -> Page {
        self.routes
            .iter()
            .find(|route| route.matches(method, path))
            .map(|route| route.page)
            .unwrap_or(Page::NotFound)
    }
}

impl Default for SiteRouter {
    fn default() -> Self {
        Self::site()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_routes() {
        let router = SiteRouter::site();
        assert_eq!(router.resolve(&Method::GET, "/"), Page::Home);
        assert_eq!(router.resolve(&Method::GET, "/services"), Page::Services);
        assert_eq!(router.resolve(&Method::GET, "/contact"), Page::Contact);
        assert_eq!(router.resolve(&Method::HEAD, "/contact"), Page::Contact);
    }

    #[test]
    fn test_fallback_is_not_found() {
        let router = SiteRouter::site();
        assert_eq!(router.resolve(&Method::GET, "/nonexistent"), Page::NotFound);
        assert_eq!(router.resolve(&Method::GET, "/services/extra"), Page::NotFound);
        assert_eq!(router.resolve(&Method::POST, "/contact"), Page::NotFound);
        assert_eq!(router.resolve(&Method::DELETE, "/"), Page::NotFound);
    }

    #[test]
    fn test_render_home() {
        let (status, doc) = SiteRouter::site().resolve(&Method::GET, "/").render();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc.head.title, "Home - TechCorp");
        let html = doc.render();
        assert!(html.contains("Welcome to TechCorp"));
        assert!(html.contains("<a href=\"/\" class=\"active\">Home</a>"));
    }

    #[test]
    fn test_render_not_found() {
        let (status, doc) = SiteRouter::site().resolve(&Method::GET, "/missing").render();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(doc.head.title, "Page Not Found - TechCorp");
        let html = doc.render();
        assert!(html.contains("404 - Page Not Found"));
        assert!(!html.contains("class=\"active\""));
    }

    #[test]
    fn test_each_page_marks_its_own_nav_entry() {
        for (path, label) in [("/services", "Our Services"), ("/contact", "Contact Us")] {
            let (_, doc) = SiteRouter::site().resolve(&Method::GET, path).render();
            let active = format!("class=\"active\">{label}</a>");
            assert!(doc.render().contains(&active), "{path}");
        }
    }
}
