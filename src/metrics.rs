//! Prometheus metrics for request and status command monitoring.
//!
//! This module provides metrics for:
//! - Requests served per endpoint
//! - HTTP request latency
//! - Status command latency and failures

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use strum::IntoStaticStr;
use tracing::debug;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Status command latency metric name.
pub const METRIC_STATUS_COMMAND_LATENCY: &str = "status_command_latency_ms";
/// Requests served counter metric name.
pub const METRIC_REQUESTS: &str = "dashboard_requests_total";
/// Status command failures counter metric name.
pub const METRIC_STATUS_COMMAND_FAILURES: &str = "status_command_failures_total";

/// Endpoint label attached to request metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Endpoint {
    Root,
    Overview,
    Sessions,
    Tasks,
    Automation,
    Memory,
    TokenMetrics,
}

impl Endpoint {
    /// Label value as exported.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_histogram!(
        METRIC_STATUS_COMMAND_LATENCY,
        "Status command run time in milliseconds"
    );

    describe_counter!(METRIC_REQUESTS, "Total number of dashboard API requests");
    describe_counter!(
        METRIC_STATUS_COMMAND_FAILURES,
        "Status command runs that fell back to estimated token counts"
    );

    debug!("Metrics initialized");
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: Endpoint) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.label()).record(latency_ms);
}

/// Record status command latency.
pub fn record_status_command_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_STATUS_COMMAND_LATENCY).record(latency_ms);
}

/// Increment the requests counter for an endpoint.
pub fn inc_requests(endpoint: Endpoint) {
    counter!(METRIC_REQUESTS, "endpoint" => endpoint.label()).increment(1);
}

/// Increment status command failures.
pub fn inc_status_command_failures(reason: &'static str) {
    counter!(METRIC_STATUS_COMMAND_FAILURES, "reason" => reason).increment(1);
}

/// RAII guard for timing a request.
/// Counts the request on creation and records latency when dropped.
pub struct RequestTimer {
    start: Instant,
    endpoint: Endpoint,
}

impl RequestTimer {
    /// Start timing a request to `endpoint`.
    pub fn new(endpoint: Endpoint) -> Self {
        inc_requests(endpoint);
        Self {
            start: Instant::now(),
            endpoint,
        }
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        record_http_latency(self.start, self.endpoint);
    }
}
