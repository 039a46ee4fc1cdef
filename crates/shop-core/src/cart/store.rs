//! In-memory cart store.

use crate::cart::Cart;
use crate::error::ShopError;
use crate::ids::{CartId, IdSequence};
use crate::listing::{CartFilter, Page};

/// Owner of every cart record. Carts are never deleted.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: Vec<Cart>,
    ids: IdSequence<CartId>,
}

impl CartStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart with the next sequential id.
    pub fn create(&mut self) -> &Cart {
        let cart = Cart::new(self.ids.next_id());
        let index = self.carts.len();
        self.carts.push(cart);
        &self.carts[index]
    }

    /// Look up a cart by id.
    pub fn get(&self, id: CartId) -> Result<&Cart, ShopError> {
        self.carts
            .iter()
            .find(|cart| cart.id == id)
            .ok_or(ShopError::CartNotFound(id))
    }

    pub(crate) fn get_mut(&mut self, id: CartId) -> Result<&mut Cart, ShopError> {
        self.carts
            .iter_mut()
            .find(|cart| cart.id == id)
            .ok_or(ShopError::CartNotFound(id))
    }

    /// List carts matching a filter, in creation order, then sliced by `page`.
    pub fn list(&self, filter: &CartFilter, page: Page) -> Vec<&Cart> {
        page.slice(self.carts.iter().filter(|cart| {
            filter.price.contains(cart.price) && filter.quantity.contains(cart.total_quantity())
        }))
    }

    /// Number of carts.
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    /// Check if no cart was ever created.
    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;
    use crate::catalog::Item;
    use crate::ids::ItemId;

    fn cart_with(store: &mut CartStore, quantity: u64, price: f64) -> CartId {
        let id = store.create().id;
        let cart = store.get_mut(id).unwrap();
        let mut entry = CartItem::snapshot(&Item::new(ItemId::new(1), "pen", 1.0));
        entry.quantity = quantity;
        cart.items.push(entry);
        cart.price = price;
        id
    }

    fn ids(carts: Vec<&Cart>) -> Vec<u64> {
        carts.into_iter().map(|cart| cart.id.get()).collect()
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = CartStore::new();
        assert_eq!(store.create().id, CartId::new(1));
        assert_eq!(store.create().id, CartId::new(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_missing() {
        let store = CartStore::new();
        assert_eq!(store.get(CartId::new(1)), Err(ShopError::CartNotFound(CartId::new(1))));
    }

    #[test]
    fn test_list_by_price() {
        let mut store = CartStore::new();
        cart_with(&mut store, 1, 5.0);
        cart_with(&mut store, 2, 15.0);
        cart_with(&mut store, 3, 25.0);

        let filter = CartFilter::new().with_price(Some(10.0), None);
        assert_eq!(ids(store.list(&filter, Page::default())), vec![2, 3]);
    }

    #[test]
    fn test_list_by_quantity() {
        let mut store = CartStore::new();
        cart_with(&mut store, 1, 5.0);
        cart_with(&mut store, 2, 15.0);
        cart_with(&mut store, 3, 25.0);
        store.create();

        let filter = CartFilter::new().with_quantity(Some(1), Some(2));
        assert_eq!(ids(store.list(&filter, Page::default())), vec![1, 2]);

        let filter = CartFilter::new().with_quantity(None, Some(0));
        assert_eq!(ids(store.list(&filter, Page::default())), vec![4]);
    }

    #[test]
    fn test_list_slicing() {
        let mut store = CartStore::new();
        for _ in 0..5 {
            store.create();
        }
        assert_eq!(ids(store.list(&CartFilter::new(), Page::new(3, 10))), vec![4, 5]);
        assert!(store.list(&CartFilter::new(), Page::new(5, 10)).is_empty());
    }
}
