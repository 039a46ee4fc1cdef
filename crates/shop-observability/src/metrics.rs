//! Per-route HTTP metrics, exposed in the Prometheus text format.

use std::string::FromUtf8Error;
use std::time::Instant;

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use thiserror::Error;

use crate::RequestId;

/// Handler label used for requests that matched no route.
pub const UNMATCHED_HANDLER: &str = "none";

/// Upper bounds (seconds) of the request latency histogram.
pub const LATENCY_BUCKETS: [f64; 13] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Content type of [`MetricsRegistry::render`] output.
pub const METRICS_CONTENT_TYPE: &str = prometheus::TEXT_FORMAT;

/// Errors building or encoding the metrics registry.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("metrics registry error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("encoded metrics are not UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// Metrics for a single finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMetrics {
    /// Request ID for correlation.
    pub request_id: String,
    /// HTTP method.
    pub method: String,
    /// Route template, or [`UNMATCHED_HANDLER`].
    pub handler: String,
    /// HTTP status code.
    pub status_code: u16,
    /// Total request duration (microseconds).
    pub duration_us: u64,
}

impl RequestMetrics {
    /// Status grouped the way dashboards usually want it, e.g. `2xx`.
    pub fn status_class(&self) -> String {
        format!("{}xx", self.status_code / 100)
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_us as f64 / 1_000_000.0
    }
}

/// Collector for the metrics of one request.
#[derive(Debug)]
pub struct MetricsCollector {
    request_id: RequestId,
    method: String,
    handler: Option<String>,
    start: Instant,
}

impl MetricsCollector {
    /// Start collecting for a request.
    pub fn new(request_id: RequestId, method: impl Into<String>) -> Self {
        Self {
            request_id,
            method: method.into(),
            handler: None,
            start: Instant::now(),
        }
    }

    /// Set the matched route template.
    pub fn set_handler(&mut self, handler: impl Into<String>) {
        self.handler = Some(handler.into());
    }

    /// Finalize and return the metrics.
    pub fn finalize(self, status_code: u16) -> RequestMetrics {
        RequestMetrics {
            request_id: self.request_id.to_string(),
            method: self.method,
            handler: self
                .handler
                .unwrap_or_else(|| UNMATCHED_HANDLER.to_string()),
            status_code,
            duration_us: self.start.elapsed().as_micros() as u64,
        }
    }
}

/// Request counters and latency histograms of one service.
///
/// Cloning is cheap and every clone feeds the same registry.
#[derive(Debug, Clone)]
pub struct MetricsRegistry {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
}

impl MetricsRegistry {
    /// Create a registry with `http_requests_total` and
    /// `http_request_duration_seconds` registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new(
                "http_requests_total",
                "Total number of requests by method, status and handler.",
            ),
            &["handler", "method", "status"],
        )?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Latency of HTTP requests by handler and method.",
            )
            .buckets(LATENCY_BUCKETS.to_vec()),
            &["handler", "method"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
        })
    }

    /// Fold one finished request into the aggregates.
    pub fn record(&self, metrics: &RequestMetrics) {
        let status = metrics.status_class();

        self.requests_total
            .with_label_values(&[
                metrics.handler.as_str(),
                metrics.method.as_str(),
                status.as_str(),
            ])
            .inc();

        self.request_duration_seconds
            .with_label_values(&[metrics.handler.as_str(), metrics.method.as_str()])
            .observe(metrics.duration_seconds());
    }

    /// Encode everything gathered so far in the text exposition format.
    pub fn render(&self) -> Result<String, MetricsError> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(handler: Option<&str>, method: &str, status: u16) -> RequestMetrics {
        let mut collector = MetricsCollector::new(RequestId::from_string("r"), method);
        if let Some(handler) = handler {
            collector.set_handler(handler);
        }
        collector.finalize(status)
    }

    #[test]
    fn test_finalize_defaults_to_unmatched() {
        let metrics = finished(None, "GET", 404);
        assert_eq!(metrics.handler, "none");
        assert_eq!(metrics.request_id, "r");
        assert_eq!(metrics.status_class(), "4xx");
    }

    #[test]
    fn test_record_groups_by_status_class() {
        let registry = MetricsRegistry::new().unwrap();
        registry.record(&finished(Some("/item"), "POST", 201));
        registry.record(&finished(Some("/item"), "POST", 200));
        registry.record(&finished(Some("/item"), "POST", 422));

        let text = registry.render().unwrap();
        assert!(text.contains("# TYPE http_requests_total counter"));
        assert!(text.contains(r#"http_requests_total{handler="/item",method="POST",status="2xx"} 2"#));
        assert!(text.contains(r#"http_requests_total{handler="/item",method="POST",status="4xx"} 1"#));
        assert!(!text.contains(r#"method="GET""#));
    }

    #[test]
    fn test_latency_is_a_histogram() {
        let registry = MetricsRegistry::new().unwrap();
        registry.record(&finished(Some("/cart/{cart_id}"), "GET", 200));
        registry.record(&finished(Some("/cart/{cart_id}"), "GET", 404));

        let text = registry.render().unwrap();
        assert!(text.contains("# TYPE http_request_duration_seconds histogram"));
        assert!(text.contains(
            r#"http_request_duration_seconds_bucket{handler="/cart/{cart_id}",method="GET",le="+Inf"} 2"#
        ));
        assert!(text.contains(
            r#"http_request_duration_seconds_count{handler="/cart/{cart_id}",method="GET"} 2"#
        ));
    }

    #[test]
    fn test_clones_share_the_registry() {
        let registry = MetricsRegistry::new().unwrap();
        registry.clone().record(&finished(Some("/mean"), "GET", 400));

        let text = registry.render().unwrap();
        assert!(text.contains(r#"http_requests_total{handler="/mean",method="GET",status="4xx"} 1"#));
    }

    #[test]
    fn test_duration_seconds() {
        let metrics = RequestMetrics {
            request_id: "r".into(),
            method: "GET".into(),
            handler: "/item".into(),
            status_code: 200,
            duration_us: 1_500_000,
        };
        assert_eq!(metrics.duration_seconds(), 1.5);
    }
}
