//! Per-request logging, metrics and request-id propagation.

use axum::extract::{MatchedPath, Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use shop_observability::{LogBuilder, LogLevel, MetricsCollector, RequestId};

use crate::state::Telemetry;

/// Header carrying the request id, honoured inbound and always set outbound.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wraps every route of a router.
///
/// Reuses an inbound `x-request-id` or generates one, hands a
/// [`shop_observability::StructuredLogger`] to handlers through request
/// extensions, records the finished request in the service's metrics
/// registry and writes one completion log line.
pub async fn track_requests(
    State(telemetry): State<Telemetry>,
    mut request: Request,
    next: Next,
) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(RequestId::from_string)
        .unwrap_or_else(RequestId::generate);

    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string());

    let mut logger = telemetry
        .log
        .logger(request_id.clone())
        .with_service(telemetry.service);
    let mut collector = MetricsCollector::new(request_id.clone(), method.clone());
    if let Some(route) = route {
        logger = logger.with_route(route.clone());
        collector.set_handler(route);
    }

    request.extensions_mut().insert(logger.clone());
    let mut response = next.run(request).await;

    let status = response.status();
    let metrics = collector.finalize(status.as_u16());
    telemetry.metrics.record(&metrics);

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let level = if status.is_server_error() {
        LogLevel::Error
    } else if status.is_client_error() {
        LogLevel::Warn
    } else {
        LogLevel::Info
    };
    LogBuilder::new(&logger, level, "Request completed")
        .field("method", method)
        .field("path", path)
        .field_i64("status", i64::from(status.as_u16()))
        .field_i64("duration_us", metrics.duration_us as i64)
        .emit();

    response
}
