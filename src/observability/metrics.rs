//! Metrics collection and exposition.
//!
//! # Metrics
//! - `contact_requests_total` (counter): requests by method, status
//! - `contact_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Exposition via the Prometheus exporter's own HTTP listener, kept off
//!   the service port
//! - `record_request` is safe to call before `init_metrics`; the macros
//!   no-op without an installed recorder

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("contact_requests_total", &labels).increment(1);
    metrics::histogram!("contact_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}
