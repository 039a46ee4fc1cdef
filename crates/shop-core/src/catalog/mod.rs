//! Item catalog module.
//!
//! Contains the item record, the strict patch payload, and the item store.

mod item;
mod store;

pub use item::{Item, ItemPatch, PATCHABLE_FIELDS};
pub use store::ItemStore;
