//! Data models for inventory entities

use serde::{Deserialize, Serialize};

/// A single tracked inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item name (primary key)
    pub name: String,
    /// Stock on hand; fractional quantities are permitted
    pub quantity: f64,
    /// Unit price
    pub price: f64,
    /// Free-form category (may be empty)
    pub category: String,
}

impl Item {
    /// Create a new item
    pub fn new(name: &str, quantity: f64, price: f64, category: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            price,
            category: category.to_string(),
        }
    }

    /// Value of this line: quantity times unit price
    pub fn value(&self) -> f64 {
        self.quantity * self.price
    }
}

/// Full inventory listing with its computed total value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryReport {
    /// Every stored item, in storage order
    pub items: Vec<Item>,
    /// Sum of quantity times unit price over all items
    pub total_value: f64,
}

impl InventoryReport {
    /// True when no items are stored
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
