//! Newtype IDs for type-safe identifiers.
//!
//! Item and cart ids are both plain sequential integers on the wire, so the
//! newtypes keep a `CartId` from being passed where an `ItemId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A sequential identifier, starting at 1.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create an ID from its raw value.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ItemId);
define_id!(CartId);

/// Monotonic id counter owned by a store.
///
/// Ids are handed out from 1 upwards and never reused, even when the record
/// they were assigned to is soft-deleted.
#[derive(Debug, Clone)]
pub struct IdSequence<T> {
    next: u64,
    _marker: PhantomData<T>,
}

impl<T: From<u64>> IdSequence<T> {
    /// Create a sequence whose first id is 1.
    pub fn new() -> Self {
        Self {
            next: 1,
            _marker: PhantomData,
        }
    }

    /// Take the next id.
    pub fn next_id(&mut self) -> T {
        let id = self.next;
        self.next += 1;
        T::from(id)
    }
}

impl<T: From<u64>> Default for IdSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_one() {
        let mut ids: IdSequence<ItemId> = IdSequence::new();
        assert_eq!(ids.next_id(), ItemId::new(1));
        assert_eq!(ids.next_id(), ItemId::new(2));
        assert_eq!(ids.next_id(), ItemId::new(3));
    }

    #[test]
    fn test_sequences_are_independent() {
        let mut items: IdSequence<ItemId> = IdSequence::new();
        let mut carts: IdSequence<CartId> = IdSequence::new();
        items.next_id();
        items.next_id();
        assert_eq!(carts.next_id(), CartId::new(1));
    }

    #[test]
    fn test_id_display() {
        let id = CartId::new(42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ItemId::new(7)).unwrap();
        assert_eq!(json, "7");
        let id: ItemId = serde_json::from_str("7").unwrap();
        assert_eq!(id.get(), 7);
    }
}
