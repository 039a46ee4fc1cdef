//! Item and cart domain logic for the shop API.
//!
//! This crate holds everything the HTTP layer needs and nothing about HTTP:
//!
//! - **Catalog**: Items with soft delete, strict partial updates
//! - **Cart**: Carts, cart items, quantity merging, live price recompute
//! - **Listing**: Price/quantity filters and offset/limit slicing
//! - **Shop**: A lock-guarded facade over both stores
//!
//! # Example
//!
//! ```rust
//! use shop_core::prelude::*;
//!
//! let shop = Shop::new();
//! let pen = shop.create_item("pen", 2.0);
//! let cart = shop.create_cart();
//!
//! shop.add_item_to_cart(cart.id, pen.id)?;
//! let cart = shop.add_item_to_cart(cart.id, pen.id)?;
//! assert_eq!(cart.items[0].quantity, 2);
//! assert_eq!(cart.price, 4.0);
//! # Ok::<(), ShopError>(())
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod listing;
pub mod shop;

pub use error::ShopError;
pub use ids::*;
pub use shop::Shop;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::ShopError;
    pub use crate::ids::*;
    pub use crate::shop::Shop;

    // Catalog
    pub use crate::catalog::{Item, ItemPatch, ItemStore};

    // Cart
    pub use crate::cart::{add_item, Cart, CartItem, CartStore};

    // Listing
    pub use crate::listing::{CartFilter, ItemFilter, Page, PriceRange, QuantityRange};
}
