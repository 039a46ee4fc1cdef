//! Listing filter types.

use serde::{Deserialize, Serialize};

/// Inclusive price window. Missing bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest accepted price.
    pub min: Option<f64>,
    /// Highest accepted price.
    pub max: Option<f64>,
}

impl PriceRange {
    /// Create a price range.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Check whether a price falls inside the window.
    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Inclusive window on a cart's total quantity. Missing bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRange {
    /// Lowest accepted quantity.
    pub min: Option<u64>,
    /// Highest accepted quantity.
    pub max: Option<u64>,
}

impl QuantityRange {
    /// Create a quantity range.
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// Check whether a quantity falls inside the window.
    pub fn contains(&self, quantity: u64) -> bool {
        self.min.map_or(true, |min| quantity >= min) && self.max.map_or(true, |max| quantity <= max)
    }
}

/// Filter for item listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemFilter {
    /// Price window.
    pub price: PriceRange,
    /// Include soft-deleted items.
    pub show_deleted: bool,
}

impl ItemFilter {
    /// Create a filter that accepts every live item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the price window.
    pub fn with_price(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price = PriceRange::new(min, max);
        self
    }

    /// Include or exclude soft-deleted items.
    pub fn with_deleted(mut self, show_deleted: bool) -> Self {
        self.show_deleted = show_deleted;
        self
    }
}

/// Filter for cart listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CartFilter {
    /// Window on the cart price.
    pub price: PriceRange,
    /// Window on the sum of item quantities.
    pub quantity: QuantityRange,
}

impl CartFilter {
    /// Create a filter that accepts every cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the price window.
    pub fn with_price(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price = PriceRange::new(min, max);
        self
    }

    /// Set the total quantity window.
    pub fn with_quantity(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.quantity = QuantityRange::new(min, max);
        self
    }
}
