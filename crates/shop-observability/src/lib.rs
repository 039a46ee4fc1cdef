//! Observability infrastructure for the shop services.
//!
//! This crate provides:
//! - `RequestId` - Unique request identifier for log correlation
//! - `StructuredLogger` - Structured logging with request context
//! - `MetricsRegistry` - Per-route request counters and latency histograms, Prometheus text output

mod logging;
mod metrics;
mod request_id;

pub use logging::*;
pub use metrics::*;
pub use request_id::RequestId;
