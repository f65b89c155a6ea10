//! Static files are served ahead of the access gate.

use axum::http::StatusCode;
use tempfile::TempDir;

use common::{get, site_at, test_config};

mod common;

const SATURDAY_NOON: &str = "2026-10-17T12:00:00+00:00";
const WEDNESDAY_2PM: &str = "2026-10-14T14:00:00+00:00";

fn public_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("styles.css"), "body { margin: 0; }").unwrap();
    dir
}

fn config_for(dir: &TempDir) -> techcorp_site::SiteConfig {
    let mut config = test_config();
    config.static_files.enabled = true;
    config.static_files.dir = dir.path().to_string_lossy().into_owned();
    config
}

#[tokio::test]
async fn test_stylesheet_served_when_closed() {
    let dir = public_dir();
    let res = get(site_at(SATURDAY_NOON, config_for(&dir)), "/styles.css").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, "body { margin: 0; }");
}

#[tokio::test]
async fn test_pages_still_gated_with_static_enabled() {
    let dir = public_dir();

    let res = get(site_at(SATURDAY_NOON, config_for(&dir)), "/").await;
    assert!(res.body.contains("We're Currently Closed"));

    let res = get(site_at(WEDNESDAY_2PM, config_for(&dir)), "/").await;
    assert!(res.body.contains("Welcome to TechCorp"));
}

#[tokio::test]
async fn test_missing_asset_falls_through_to_not_found() {
    let dir = public_dir();
    let res = get(site_at(WEDNESDAY_2PM, config_for(&dir)), "/missing.css").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.contains("404 - Page Not Found"));
}
