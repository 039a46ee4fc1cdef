//! `GET /metrics` in the Prometheus text format.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Extension;
use shop_observability::{MetricsError, StructuredLogger, METRICS_CONTENT_TYPE};

use crate::error::{CalcApiError, ShopApiError};
use crate::state::{CalculatorState, ShopState, Telemetry};

fn render(telemetry: &Telemetry, log: &StructuredLogger) -> Result<Response, MetricsError> {
    let body = telemetry.metrics.render().inspect_err(|error| {
        log.error_builder("Failed to encode metrics")
            .field("error", error.to_string())
            .emit();
    })?;
    Ok(([(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)], body).into_response())
}

pub async fn shop_metrics(
    State(state): State<ShopState>,
    Extension(log): Extension<StructuredLogger>,
) -> Result<Response, ShopApiError> {
    render(&state.telemetry, &log).map_err(|_| ShopApiError::internal("Failed to encode metrics"))
}

pub async fn calculator_metrics(
    State(state): State<CalculatorState>,
    Extension(log): Extension<StructuredLogger>,
) -> Result<Response, CalcApiError> {
    render(&state.telemetry, &log).map_err(|_| CalcApiError::internal("Failed to encode metrics"))
}
