//! Helpers shared by the router tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use shop_api::{CalculatorLimits, CalculatorState, ShopState};
use shop_observability::{LogConfig, LogLevel};
use tower::ServiceExt;

fn quiet() -> LogConfig {
    LogConfig {
        level: LogLevel::Error,
        ..LogConfig::default()
    }
}

pub fn shop_app() -> Router {
    shop_api::shop_router(ShopState::new(quiet()).expect("metrics registry"))
}

pub fn calculator_app() -> Router {
    calculator_app_with(CalculatorLimits::default())
}

pub fn calculator_app_with(limits: CalculatorLimits) -> Router {
    shop_api::calculator_router(CalculatorState::new(limits, quiet()).expect("metrics registry"))
}

/// Response status, headers and body decoded as JSON (`Value::Null` when empty).
pub struct TestResponse {
    pub status: StatusCode,
    pub response: Response<()>,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        if self.text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&self.text).expect("response body is JSON")
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |body| Body::from(body.to_string())))
        .expect("valid request");

    let response = app.clone().oneshot(request).await.expect("infallible");
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.expect("body").to_bytes();

    TestResponse {
        status: parts.status,
        response: Response::from_parts(parts, ()),
        text: String::from_utf8(bytes.to_vec()).expect("utf-8 body"),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Option<&str>) -> TestResponse {
    send(app, Method::POST, uri, body).await
}
