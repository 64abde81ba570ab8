//! Request metrics.
//!
//! Standardized metrics for monitoring outbound API calls:
//! - Request counters by operation and status
//! - Latency histograms
//! - Duplicate-submission suppressions

use metrics::{counter, histogram};

/// Metric name constants for consistency.
pub mod names {
    /// Total API requests by operation and status.
    pub const REQUESTS_TOTAL: &str = "joblink_requests_total";

    /// Request latency in seconds by operation.
    pub const LATENCY_SECONDS: &str = "joblink_latency_seconds";

    /// Duplicate in-flight submissions suppressed, by action.
    pub const INFLIGHT_SUPPRESSED_TOTAL: &str = "joblink_inflight_suppressed_total";
}

/// Record metrics for a completed request.
pub fn record_request(operation: &str, status: u16, latency_ms: f64) {
    counter!(
        names::REQUESTS_TOTAL,
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        names::LATENCY_SECONDS,
        "operation" => operation.to_string()
    )
    .record(latency_ms / 1000.0);
}

/// Record a suppressed duplicate submission.
pub fn record_suppressed(action: &str) {
    counter!(
        names::INFLIGHT_SUPPRESSED_TOTAL,
        "action" => action.to_string()
    )
    .increment(1);
}
