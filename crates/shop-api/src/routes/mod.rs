//! Route handlers.

pub mod calculator;
pub mod cart;
pub mod item;
pub mod metrics;
pub mod params;

use crate::error::ShopApiError;

/// Fallback for unknown shop paths.
pub async fn shop_not_found() -> ShopApiError {
    ShopApiError::not_found("Not Found")
}

/// Fallback for known shop paths hit with an unsupported method.
pub async fn shop_method_not_allowed() -> ShopApiError {
    ShopApiError::method_not_allowed()
}
