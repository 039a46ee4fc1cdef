//! Extractors whose rejections use the shop error body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ShopApiError;

/// JSON body; malformed or mistyped payloads answer 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ShopApiError))]
pub struct ShopJson<T>(pub T);

/// Path parameters; ids that are not unsigned integers answer 422.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ShopApiError))]
pub struct ShopPath<T>(pub T);

/// Query string; unparsable values answer 422.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ShopApiError))]
pub struct ShopQuery<T>(pub T);
