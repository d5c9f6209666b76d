//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "hilite_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "hilite_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "hilite_http_requests_in_flight";

    // Job metrics
    pub const JOBS_TOTAL: &str = "hilite_jobs_total";
    pub const JOB_DURATION_SECONDS: &str = "hilite_job_duration_seconds";
    pub const CLIPS_GENERATED_TOTAL: &str = "hilite_clips_generated_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, endpoint: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("endpoint", endpoint.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a finished processing job.
pub fn record_job(outcome: &str, duration_secs: f64) {
    let labels = [("outcome", outcome.to_string())];
    counter!(names::JOBS_TOTAL, &labels).increment(1);
    histogram!(names::JOB_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record generated clips.
pub fn record_clips_generated(count: u64) {
    counter!(names::CLIPS_GENERATED_TOTAL).increment(count);
}

/// Collapse request paths to the known endpoint set.
///
/// Keeps label cardinality bounded when clients probe arbitrary paths.
fn endpoint_label(path: &str) -> &'static str {
    match path {
        "/process" => "/process",
        "/health" => "/health",
        "/healthz" => "/healthz",
        "/ready" => "/ready",
        "/metrics" => "/metrics",
        _ => "other",
    }
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let endpoint = endpoint_label(request.uri().path());
    let start = Instant::now();

    // Increment in-flight counter
    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    // Decrement in-flight counter
    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, endpoint, status, duration);

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_label() {
        assert_eq!(endpoint_label("/process"), "/process");
        assert_eq!(endpoint_label("/healthz"), "/healthz");
        assert_eq!(endpoint_label("/does-not-exist"), "other");
        assert_eq!(endpoint_label("/process/../etc"), "other");
    }
}
