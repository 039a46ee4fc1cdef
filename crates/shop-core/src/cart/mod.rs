//! Shopping cart module.
//!
//! Contains cart and cart item types, the cart store, and the logic that
//! puts items into carts and keeps cart prices current.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartItem};
pub use pricing::{add_item, cart_price};
pub use store::CartStore;
