//! Thread-safe facade over the item and cart stores.

use parking_lot::Mutex;

use crate::cart::{self, Cart, CartStore};
use crate::catalog::{Item, ItemPatch, ItemStore};
use crate::error::ShopError;
use crate::ids::{CartId, ItemId};
use crate::listing::{CartFilter, ItemFilter, Page};

#[derive(Debug, Default)]
struct Stores {
    items: ItemStore,
    carts: CartStore,
}

/// The shop state shared by all request handlers.
///
/// Both stores sit behind a single lock, so each operation, including the
/// two-store `add_item`, runs as one critical section. Results are owned
/// copies; no lock outlives a call.
#[derive(Debug, Default)]
pub struct Shop {
    stores: Mutex<Stores>,
}

impl Shop {
    /// Create an empty shop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an item.
    pub fn create_item(&self, name: impl Into<String>, price: f64) -> Item {
        self.stores.lock().items.create(name, price).clone()
    }

    /// Look up an item, deleted or not.
    pub fn get_item(&self, id: ItemId) -> Result<Item, ShopError> {
        self.stores.lock().items.get(id).cloned()
    }

    /// List items.
    pub fn list_items(&self, filter: &ItemFilter, page: Page) -> Vec<Item> {
        let stores = self.stores.lock();
        stores.items.list(filter, page).into_iter().cloned().collect()
    }

    /// Replace an item's name and price.
    pub fn update_item(
        &self,
        id: ItemId,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Item, ShopError> {
        self.stores.lock().items.update(id, name, price).cloned()
    }

    /// Partially update a live item.
    pub fn patch_item(&self, id: ItemId, patch: ItemPatch) -> Result<Item, ShopError> {
        self.stores.lock().items.patch(id, patch).cloned()
    }

    /// Soft-delete an item.
    pub fn delete_item(&self, id: ItemId) -> Result<Item, ShopError> {
        self.stores.lock().items.delete(id).cloned()
    }

    /// Create an empty cart.
    pub fn create_cart(&self) -> Cart {
        self.stores.lock().carts.create().clone()
    }

    /// Look up a cart.
    pub fn get_cart(&self, id: CartId) -> Result<Cart, ShopError> {
        self.stores.lock().carts.get(id).cloned()
    }

    /// List carts.
    pub fn list_carts(&self, filter: &CartFilter, page: Page) -> Vec<Cart> {
        let stores = self.stores.lock();
        stores.carts.list(filter, page).into_iter().cloned().collect()
    }

    /// Add one unit of an item to a cart.
    pub fn add_item_to_cart(&self, cart_id: CartId, item_id: ItemId) -> Result<Cart, ShopError> {
        let mut stores = self.stores.lock();
        let Stores { items, carts } = &mut *stores;
        cart::add_item(carts, items, cart_id, item_id).cloned()
    }
}
