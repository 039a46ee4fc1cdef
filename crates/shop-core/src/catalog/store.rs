//! In-memory item store.

use crate::catalog::{Item, ItemPatch};
use crate::error::ShopError;
use crate::ids::{IdSequence, ItemId};
use crate::listing::{ItemFilter, Page};

/// Owner of every item record.
///
/// Records are kept in creation order and looked up with a linear scan, which
/// is fine for the sizes this service handles. Items are never removed; a
/// delete only flips the soft-delete flag.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    ids: IdSequence<ItemId>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an item with the next sequential id.
    pub fn create(&mut self, name: impl Into<String>, price: f64) -> &Item {
        let item = Item::new(self.ids.next_id(), name, price);
        let index = self.items.len();
        self.items.push(item);
        &self.items[index]
    }

    /// Look up an item by id, deleted or not.
    pub fn get(&self, id: ItemId) -> Result<&Item, ShopError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(ShopError::ItemNotFound(id))
    }

    fn get_mut(&mut self, id: ItemId) -> Result<&mut Item, ShopError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ShopError::ItemNotFound(id))
    }

    /// List items matching a filter, in creation order, then sliced by `page`.
    pub fn list(&self, filter: &ItemFilter, page: Page) -> Vec<&Item> {
        page.slice(self.items.iter().filter(|item| {
            filter.price.contains(item.price) && (filter.show_deleted || !item.deleted)
        }))
    }

    /// Replace the name and price of an item. The deleted flag is left alone.
    pub fn update(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
        price: f64,
    ) -> Result<&Item, ShopError> {
        let item = self.get_mut(id)?;
        item.name = name.into();
        item.price = price;
        Ok(&*item)
    }

    /// Apply a partial update.
    ///
    /// Deleted items are frozen: patching one fails with
    /// [`ShopError::ItemDeleted`] and changes nothing.
    pub fn patch(&mut self, id: ItemId, patch: ItemPatch) -> Result<&Item, ShopError> {
        let item = self.get_mut(id)?;
        if item.deleted {
            return Err(ShopError::ItemDeleted(id));
        }
        patch.apply_to(item);
        Ok(&*item)
    }

    /// Soft-delete an item. Deleting twice is not an error.
    pub fn delete(&mut self, id: ItemId) -> Result<&Item, ShopError> {
        let item = self.get_mut(id)?;
        item.deleted = true;
        Ok(&*item)
    }

    /// Number of records, deleted ones included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no item was ever created.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
