//! `/item` endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use shop_core::catalog::{Item, ItemPatch};
use shop_core::listing::ItemFilter;
use shop_core::ItemId;
use shop_observability::StructuredLogger;

use super::params::{default_limit, deserialize_flag, non_negative_price, path_id, Pagination};
use crate::error::ShopApiError;
use crate::extract::{ShopJson, ShopPath, ShopQuery};
use crate::state::ShopState;

/// Body of `POST /item` and `PUT /item/{item_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemBody {
    pub name: String,
    pub price: f64,
}

/// Query of `GET /item`.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemListQuery {
    #[serde(default)]
    pub offset: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub show_deleted: bool,
}

pub async fn create_item(
    State(state): State<ShopState>,
    Extension(log): Extension<StructuredLogger>,
    ShopJson(body): ShopJson<ItemBody>,
) -> (StatusCode, Json<Item>) {
    let item = state.shop.create_item(body.name, body.price);
    log.debug_builder("Item created")
        .field_i64("item_id", item.id.get() as i64)
        .emit();
    (StatusCode::CREATED, Json(item))
}

/// Deleted items are reported as missing.
pub async fn get_item(
    State(state): State<ShopState>,
    ShopPath(item_id): ShopPath<String>,
) -> Result<Json<Item>, ShopApiError> {
    let item = state.shop.get_item(resolve(path_id(&item_id)?)?)?;
    if !item.is_available() {
        return Err(ShopApiError::not_found("Item not found"));
    }
    Ok(Json(item))
}

pub async fn list_items(
    State(state): State<ShopState>,
    Extension(log): Extension<StructuredLogger>,
    ShopQuery(query): ShopQuery<ItemListQuery>,
) -> Result<Json<Vec<Item>>, ShopApiError> {
    let page = Pagination {
        offset: query.offset,
        limit: query.limit,
    }
    .page()?;
    let filter = ItemFilter::new()
        .with_price(
            non_negative_price("min_price", query.min_price)?,
            non_negative_price("max_price", query.max_price)?,
        )
        .with_deleted(query.show_deleted);

    let items = state.shop.list_items(&filter, page);
    log.debug_builder("Items listed")
        .field_i64("count", items.len() as i64)
        .field_bool("show_deleted", query.show_deleted)
        .emit();
    Ok(Json(items))
}

pub async fn replace_item(
    State(state): State<ShopState>,
    ShopPath(item_id): ShopPath<String>,
    ShopJson(body): ShopJson<ItemBody>,
) -> Result<Json<Item>, ShopApiError> {
    let id = resolve(path_id(&item_id)?)?;
    let item = state.shop.update_item(id, body.name, body.price)?;
    Ok(Json(item))
}

/// The payload is checked before the item is looked up, so an invalid
/// body answers 422 even for an unknown id.
pub async fn patch_item(
    State(state): State<ShopState>,
    Extension(log): Extension<StructuredLogger>,
    ShopPath(item_id): ShopPath<String>,
    ShopJson(fields): ShopJson<Map<String, Value>>,
) -> Result<Json<Item>, ShopApiError> {
    let id = path_id(&item_id)?;
    let patch = ItemPatch::from_fields(&fields)?;
    let id = resolve(id)?;
    let item = state.shop.patch_item(id, patch).inspect_err(|error| {
        if error.is_conflict() {
            log.info_builder("Patch refused on deleted item")
                .field_i64("item_id", id.get() as i64)
                .emit();
        }
    })?;
    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<ShopState>,
    ShopPath(item_id): ShopPath<String>,
) -> Result<Json<Value>, ShopApiError> {
    state.shop.delete_item(resolve(path_id(&item_id)?)?)?;
    Ok(Json(json!({ "message": "Item deleted successfully" })))
}

fn resolve(id: Option<u64>) -> Result<ItemId, ShopApiError> {
    id.map(ItemId::new)
        .ok_or_else(|| ShopApiError::not_found("Item not found"))
}
