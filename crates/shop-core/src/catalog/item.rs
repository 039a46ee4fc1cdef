//! Item and item patch types.

use crate::error::ShopError;
use crate::ids::ItemId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields a patch may touch.
pub const PATCHABLE_FIELDS: [&str; 2] = ["name", "price"];

/// An item that can be put into carts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Sequential item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Soft-delete marker. Deleted items are kept but hidden from default listings.
    #[serde(default)]
    pub deleted: bool,
}

impl Item {
    /// Create a live item.
    pub fn new(id: ItemId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            deleted: false,
        }
    }

    /// Check if the item can still be bought.
    pub fn is_available(&self) -> bool {
        !self.deleted
    }
}

/// A partial update of an item. Unset fields stay unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    /// New name.
    pub name: Option<String>,
    /// New price.
    pub price: Option<f64>,
}

impl ItemPatch {
    /// Patch only the name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            price: None,
        }
    }

    /// Patch only the price.
    pub fn price(price: f64) -> Self {
        Self {
            name: None,
            price: Some(price),
        }
    }

    /// Build a patch from a raw JSON object.
    ///
    /// Any key outside [`PATCHABLE_FIELDS`] rejects the whole payload, as does
    /// a field of the wrong type. `null` counts as "not supplied".
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, ShopError> {
        let mut unknown: Vec<&str> = fields
            .keys()
            .map(String::as_str)
            .filter(|key| !PATCHABLE_FIELDS.contains(key))
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(ShopError::ValidationRejected(format!(
                "unrecognized field(s): {}",
                unknown.join(", ")
            )));
        }

        let name = match fields.get("name") {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(_) => {
                return Err(ShopError::ValidationRejected(
                    "field 'name' must be a string".to_string(),
                ))
            }
        };

        let price = match fields.get("price") {
            None | Some(Value::Null) => None,
            Some(Value::Number(price)) => price.as_f64(),
            Some(_) => {
                return Err(ShopError::ValidationRejected(
                    "field 'price' must be a number".to_string(),
                ))
            }
        };

        Ok(Self { name, price })
    }

    /// Check if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }

    /// Apply the supplied fields to an item.
    pub(crate) fn apply_to(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_item_serialization() {
        let item = Item::new(ItemId::new(1), "pen", 2.0);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"id": 1, "name": "pen", "price": 2.0, "deleted": false}));
    }

    #[test]
    fn test_patch_from_known_fields() {
        let patch = ItemPatch::from_fields(&object(json!({"price": 3.0}))).unwrap();
        assert_eq!(patch, ItemPatch::price(3.0));

        let patch = ItemPatch::from_fields(&object(json!({"name": "pencil", "price": 1}))).unwrap();
        assert_eq!(patch.name.as_deref(), Some("pencil"));
        assert_eq!(patch.price, Some(1.0));
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let err = ItemPatch::from_fields(&object(json!({"price": 1.0, "deleted": true, "color": "red"})))
            .unwrap_err();
        assert_eq!(
            err,
            ShopError::ValidationRejected("unrecognized field(s): color, deleted".to_string())
        );
    }

    #[test]
    fn test_patch_rejects_wrong_types() {
        let err = ItemPatch::from_fields(&object(json!({"name": 5}))).unwrap_err();
        assert!(err.is_validation());

        let err = ItemPatch::from_fields(&object(json!({"price": "cheap"}))).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_patch_null_means_unset() {
        let patch = ItemPatch::from_fields(&object(json!({"name": null}))).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_apply_keeps_unset_fields() {
        let mut item = Item::new(ItemId::new(1), "pen", 2.0);
        ItemPatch::name("marker").apply_to(&mut item);
        assert_eq!(item.name, "marker");
        assert_eq!(item.price, 2.0);
    }
}
