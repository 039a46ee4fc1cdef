//! Listing module.
//!
//! Contains the filter and offset/limit types shared by the item and cart
//! listings.

mod filter;
mod page;

pub use filter::{CartFilter, ItemFilter, PriceRange, QuantityRange};
pub use page::{Page, DEFAULT_LIMIT};
