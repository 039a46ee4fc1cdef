//! Cart and cart item types.

use crate::catalog::Item;
use crate::ids::{CartId, ItemId};
use serde::{Deserialize, Serialize};

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Sequential cart identifier.
    pub id: CartId,
    /// Items in first-added order, at most one entry per item id.
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Derived total; only ever written by a price recompute.
    #[serde(default)]
    pub price: f64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
            price: 0.0,
        }
    }

    /// Get total item count (sum of quantities).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the entry for an item.
    pub fn get_item(&self, item_id: ItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub(crate) fn get_item_mut(&mut self, item_id: ItemId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }
}

/// An item entry inside a cart.
///
/// `name` and `available` are copied from the item when it is first added
/// and never refreshed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Id of the item this entry refers to.
    pub id: ItemId,
    /// Item name at the time of the first addition.
    pub name: String,
    /// How many times the item was added.
    pub quantity: u64,
    /// Whether the item was live at the time of the first addition.
    pub available: bool,
}

impl CartItem {
    /// Snapshot an item into a new entry with quantity 1.
    pub fn snapshot(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: 1,
            available: item.is_available(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(CartId::new(1));
        assert!(cart.is_empty());
        assert_eq!(cart.price, 0.0);
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_snapshot_of_deleted_item() {
        let mut item = Item::new(ItemId::new(4), "lamp", 30.0);
        item.deleted = true;
        let entry = CartItem::snapshot(&item);
        assert_eq!(entry.quantity, 1);
        assert!(!entry.available);
        assert_eq!(entry.name, "lamp");
    }

    #[test]
    fn test_total_quantity() {
        let mut cart = Cart::new(CartId::new(1));
        let mut pen = CartItem::snapshot(&Item::new(ItemId::new(1), "pen", 2.0));
        pen.quantity = 3;
        cart.items.push(pen);
        cart.items
            .push(CartItem::snapshot(&Item::new(ItemId::new(2), "ink", 4.0)));

        assert_eq!(cart.total_quantity(), 4);
        assert_eq!(cart.unique_item_count(), 2);
        assert!(cart.get_item(ItemId::new(2)).is_some());
        assert!(cart.get_item(ItemId::new(3)).is_none());
    }

    #[test]
    fn test_cart_serialization() {
        let mut cart = Cart::new(CartId::new(1));
        cart.items
            .push(CartItem::snapshot(&Item::new(ItemId::new(1), "pen", 2.0)));
        cart.price = 2.0;

        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "items": [{"id": 1, "name": "pen", "quantity": 1, "available": true}],
                "price": 2.0
            })
        );
    }
}
