//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_requests_total` (counter): requests by method, status, page
//! - `site_request_duration_seconds` (histogram): time spent rendering a page
//! - `site_gate_decisions_total` (counter): access gate outcomes (open/closed)
//!
//! Recording is a no-op until a recorder is installed, so the functions are
//! safe to call from tests.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Fails if the listener cannot bind or a global recorder is already set.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(method: &str, status: u16, page: &'static str, start: Instant) {
    metrics::counter!(
        "site_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "page" => page
    )
    .increment(1);
    metrics::histogram!("site_request_duration_seconds", "page" => page)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_gate_decision(outcome: &'static str) {
    metrics::counter!("site_gate_decisions_total", "outcome" => outcome).increment(1);
}
