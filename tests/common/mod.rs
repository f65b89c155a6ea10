//! Shared utilities for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, FixedOffset};
use tower::ServiceExt;

use techcorp_site::{FixedClock, SiteConfig, SiteServer};

pub fn at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

/// Defaults, minus static files.
pub fn test_config() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.static_files.enabled = false;
    config
}

/// A router whose clock is frozen at `rfc3339`.
pub fn site_at(rfc3339: &str, config: SiteConfig) -> Router {
    SiteServer::with_clock(config, Arc::new(FixedClock(at(rfc3339)))).router()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

pub async fn send(router: Router, method: Method, path: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(router: Router, path: &str) -> TestResponse {
    send(router, Method::GET, path).await
}
