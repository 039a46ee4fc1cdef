//! HTTP error responses.
//!
//! The shop answers failures with `{"detail": "..."}` and the calculator
//! with `{"error": "..."}`. Extractor rejections (malformed JSON, path
//! segments or query strings) become `422 Unprocessable Entity` in both.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use shop_core::ShopError;
use shop_math::MathError;

// =============================================================================
// Shop
// =============================================================================

/// Error returned by shop handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ShopApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// 404 Not Found.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    /// 422 Unprocessable Entity.
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    /// 405 Method Not Allowed.
    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    }

    /// 500 Internal Server Error.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }

    /// 304 Not Modified. Rendered without a body.
    pub fn not_modified() -> Self {
        Self::new(StatusCode::NOT_MODIFIED, "Not Modified")
    }
}

impl IntoResponse for ShopApiError {
    fn into_response(self) -> Response {
        if self.status == StatusCode::NOT_MODIFIED {
            return self.status.into_response();
        }
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<ShopError> for ShopApiError {
    fn from(error: ShopError) -> Self {
        match error {
            ShopError::ItemNotFound(_) => Self::not_found("Item not found"),
            ShopError::CartNotFound(_) => Self::not_found("Cart not found"),
            ShopError::ValidationRejected(message) => Self::unprocessable(message),
            ShopError::ItemDeleted(_) => Self::not_modified(),
        }
    }
}

impl From<JsonRejection> for ShopApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for ShopApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for ShopApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Error returned by calculator handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcApiError {
    pub status: StatusCode,
    pub message: String,
}

impl CalcApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for CalcApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<MathError> for CalcApiError {
    fn from(error: MathError) -> Self {
        match error {
            MathError::Negative(_) => {
                Self::bad_request("Parameter 'n' must be a non-negative integer.")
            }
            MathError::TooLarge { max, .. } => {
                Self::bad_request(format!("Parameter 'n' must not exceed {max}."))
            }
            MathError::EmptyInput => Self::bad_request("Body must be a non-empty array of floats."),
            MathError::NonFinite => Self::bad_request("Mean is out of the representable range."),
        }
    }
}

impl From<QueryRejection> for CalcApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}
