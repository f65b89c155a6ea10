//! Route matching logic.
//!
//! # Responsibilities
//! - Match request method
//! - Match request path exactly, with the lenient rules browsers expect
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Path matching is case-insensitive and tolerates one trailing slash
//! - Query strings never reach the matcher (callers pass `uri.path()`)
//! - No regex: the route table is tiny and fixed

use axum::http::Method;

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, method: &Method, path: &str) -> bool;
}

/// Matches GET requests. HEAD is treated as GET.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetMatcher;

impl Matcher for GetMatcher {
    fn matches(&self, method: &Method, _path: &str) -> bool {
        *method == Method::GET || *method == Method::HEAD
    }
}

/// Matches one path exactly.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    path: String,
}

impl PathMatcher {
    /// The path is normalized to lowercase without a trailing slash.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: normalize(&path.into()),
        }
    }
}

impl Matcher for PathMatcher {
    fn matches(&self, _method: &Method, path: &str) -> bool {
        normalize(path) == self.path
    }
}

fn normalize(path: &str) -> String {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
        _ => path,
    };
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_lowercase()
    }
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, method: &Method, path: &str) -> bool {
        self.matchers.iter().all(|m| m.matches(method, path))
    }
}
