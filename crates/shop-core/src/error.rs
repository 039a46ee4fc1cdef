//! Shop error types.

use crate::ids::{CartId, ItemId};
use thiserror::Error;

/// Errors that can occur in shop operations.
///
/// Every failing operation leaves both stores untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShopError {
    /// Item not found.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Cart not found.
    #[error("Cart not found: {0}")]
    CartNotFound(CartId),

    /// Patch payload failed the strict schema check.
    #[error("Validation error: {0}")]
    ValidationRejected(String),

    /// Item is soft-deleted and can no longer be patched.
    #[error("Item is deleted and cannot be modified: {0}")]
    ItemDeleted(ItemId),
}

impl ShopError {
    /// Check if this is a lookup failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ShopError::ItemNotFound(_) | ShopError::CartNotFound(_))
    }

    /// Check if this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, ShopError::ValidationRejected(_))
    }

    /// Check if the target was in a state that forbids the change.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ShopError::ItemDeleted(_))
    }
}
