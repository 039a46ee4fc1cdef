//! `/cart` endpoints.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;
use shop_core::cart::Cart;
use shop_core::listing::CartFilter;
use shop_core::{CartId, ItemId};
use shop_observability::StructuredLogger;

use super::params::{default_limit, non_negative, non_negative_price, path_id, Pagination};
use crate::error::ShopApiError;
use crate::extract::{ShopPath, ShopQuery};
use crate::state::ShopState;

/// Query of `GET /cart`.
#[derive(Debug, Clone, Deserialize)]
pub struct CartListQuery {
    #[serde(default)]
    pub offset: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_quantity: Option<i64>,
    pub max_quantity: Option<i64>,
}

/// Answers `201 {"id": n}` with `Location: /cart/{n}`.
pub async fn create_cart(State(state): State<ShopState>) -> Response {
    let cart = state.shop.create_cart();
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/cart/{}", cart.id))],
        Json(json!({ "id": cart.id })),
    )
        .into_response()
}

pub async fn get_cart(
    State(state): State<ShopState>,
    ShopPath(cart_id): ShopPath<String>,
) -> Result<Json<Cart>, ShopApiError> {
    let id = path_id(&cart_id)?
        .map(CartId::new)
        .ok_or_else(|| ShopApiError::not_found("Cart not found"))?;
    Ok(Json(state.shop.get_cart(id)?))
}

pub async fn list_carts(
    State(state): State<ShopState>,
    ShopQuery(query): ShopQuery<CartListQuery>,
) -> Result<Json<Vec<Cart>>, ShopApiError> {
    let page = Pagination {
        offset: query.offset,
        limit: query.limit,
    }
    .page()?;
    let min_quantity = query
        .min_quantity
        .map(|value| non_negative("min_quantity", value))
        .transpose()?;
    let max_quantity = query
        .max_quantity
        .map(|value| non_negative("max_quantity", value))
        .transpose()?;
    let filter = CartFilter::new()
        .with_price(
            non_negative_price("min_price", query.min_price)?,
            non_negative_price("max_price", query.max_price)?,
        )
        .with_quantity(min_quantity, max_quantity);

    Ok(Json(state.shop.list_carts(&filter, page)))
}

/// Adds one unit of the item; a missing cart and a missing item answer
/// the same 404.
pub async fn add_item(
    State(state): State<ShopState>,
    Extension(log): Extension<StructuredLogger>,
    ShopPath((cart_id, item_id)): ShopPath<(String, String)>,
) -> Result<Json<Cart>, ShopApiError> {
    let (Some(cart), Some(item)) = (path_id(&cart_id)?, path_id(&item_id)?) else {
        return Err(missing_target(&log, &cart_id, &item_id));
    };

    let cart = state
        .shop
        .add_item_to_cart(CartId::new(cart), ItemId::new(item))
        .map_err(|error| {
            if error.is_not_found() {
                missing_target(&log, &cart_id, &item_id)
            } else {
                error.into()
            }
        })?;

    log.debug_builder("Item added to cart")
        .field_i64("cart_id", cart.id.get() as i64)
        .field_i64("item_id", item as i64)
        .field_f64("cart_price", cart.price)
        .emit();
    Ok(Json(cart))
}

fn missing_target(log: &StructuredLogger, cart_id: &str, item_id: &str) -> ShopApiError {
    log.warn_builder("Cart or item not found")
        .field("cart_id", cart_id)
        .field("item_id", item_id)
        .emit();
    ShopApiError::not_found("Cart or item not found")
}
