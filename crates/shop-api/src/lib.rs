//! HTTP surface of the shop and calculator services.
//!
//! Two independent axum routers are exposed:
//!
//! - [`shop_router`] serves the item catalog and carts backed by a
//!   [`shop_core::Shop`]. Error bodies look like `{"detail": "..."}`.
//! - [`calculator_router`] serves `/factorial`, `/fibonacci/<n>` and `/mean`.
//!   Error bodies look like `{"error": "..."}`.
//!
//! Both routers log one completion line per request, echo an `x-request-id`
//! header and aggregate per-route metrics served at `/metrics`.

pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

pub use error::{CalcApiError, ShopApiError};
pub use middleware::REQUEST_ID_HEADER;
pub use state::{CalculatorLimits, CalculatorState, ShopState, Telemetry};

/// Build the shop router.
///
/// Routes:
/// - `POST /item`, `GET /item`
/// - `GET|PUT|PATCH|DELETE /item/{item_id}`
/// - `POST /cart`, `GET /cart`
/// - `GET /cart/{cart_id}`
/// - `POST /cart/{cart_id}/add/{item_id}`
/// - `GET /metrics`
///
/// Unknown paths answer 404 and known paths with another method 405, both
/// with a `{"detail"}` body.
pub fn shop_router(state: ShopState) -> Router {
    let telemetry = state.telemetry.clone();

    Router::new()
        .route("/item", post(routes::item::create_item).get(routes::item::list_items))
        .route(
            "/item/{item_id}",
            get(routes::item::get_item)
                .put(routes::item::replace_item)
                .patch(routes::item::patch_item)
                .delete(routes::item::delete_item),
        )
        .route("/cart", post(routes::cart::create_cart).get(routes::cart::list_carts))
        .route("/cart/{cart_id}", get(routes::cart::get_cart))
        .route("/cart/{cart_id}/add/{item_id}", post(routes::cart::add_item))
        .route("/metrics", get(routes::metrics::shop_metrics))
        .fallback(routes::shop_not_found)
        .method_not_allowed_fallback(routes::shop_method_not_allowed)
        .layer(from_fn_with_state(telemetry, middleware::track_requests))
        .with_state(state)
}

/// Build the calculator router.
///
/// Only `GET` is served; any other method, and any other path, gets
/// `404 {"error": "Not Found"}`.
pub fn calculator_router(state: CalculatorState) -> Router {
    use routes::calculator as calc;

    let telemetry = state.telemetry.clone();

    Router::new()
        .route("/factorial", get(calc::factorial).fallback(calc::not_found))
        .route("/fibonacci/", get(calc::fibonacci_empty).fallback(calc::not_found))
        .route("/fibonacci/{*rest}", get(calc::fibonacci).fallback(calc::not_found))
        .route("/mean", get(calc::mean).fallback(calc::not_found))
        .route("/metrics", get(routes::metrics::calculator_metrics).fallback(calc::not_found))
        .fallback(calc::not_found)
        .layer(from_fn_with_state(telemetry, middleware::track_requests))
        .with_state(state)
}
