//! Putting items into carts and keeping cart prices current.

use crate::cart::{Cart, CartItem, CartStore};
use crate::catalog::ItemStore;
use crate::error::ShopError;
use crate::ids::{CartId, ItemId};

/// Add one unit of an item to a cart and recompute the cart price.
///
/// Both ids are resolved before anything is touched, so a missing cart or
/// item leaves both stores as they were. Adding an item that is already in
/// the cart bumps its quantity and keeps the entry's original snapshot.
pub fn add_item<'a>(
    carts: &'a mut CartStore,
    items: &ItemStore,
    cart_id: CartId,
    item_id: ItemId,
) -> Result<&'a Cart, ShopError> {
    let cart = carts.get_mut(cart_id)?;
    let item = items.get(item_id)?;

    match cart.get_item_mut(item_id) {
        Some(entry) => entry.quantity += 1,
        None => cart.items.push(CartItem::snapshot(item)),
    }

    cart.price = cart_price(cart, items);
    Ok(&*cart)
}

/// Price a cart against the current item prices.
///
/// Entries snapshotted as unavailable contribute nothing. Entries snapshotted
/// as available contribute `quantity * price` at today's price, even if the
/// item has been deleted since.
pub fn cart_price(cart: &Cart, items: &ItemStore) -> f64 {
    cart.items
        .iter()
        .filter(|entry| entry.available)
        .filter_map(|entry| {
            let item = items.get(entry.id).ok()?;
            Some(entry.quantity as f64 * item.price)
        })
        .sum()
}
