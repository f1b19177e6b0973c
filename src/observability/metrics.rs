//! Metrics collection and exposition.
//!
//! # Metrics
//! - `sitemap_route_builds_total` (counter): index builds by outcome
//! - `sitemap_route_build_duration_seconds` (histogram): build latency, provider fetch included
//! - `sitemap_route_routes` (gauge): routes in the published index
//! - `sitemap_route_lookups_total` (counter): lookups by result (hit, miss)

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exporter on `addr`. Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a finished build attempt.
pub fn record_build(outcome: &'static str, start: Instant) {
    counter!("sitemap_route_builds_total", "outcome" => outcome).increment(1);
    histogram!("sitemap_route_build_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record the size of the newly published index.
pub fn record_route_count(count: usize) {
    gauge!("sitemap_route_routes").set(count as f64);
}

/// Record a lookup against the published index.
pub fn record_lookup(hit: bool) {
    let result = if hit { "hit" } else { "miss" };
    counter!("sitemap_route_lookups_total", "result" => result).increment(1);
}
