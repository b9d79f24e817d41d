//! Item operations
//!
//! This module provides the data operations of the Inventory store.

use tracing::debug;
use crate::database::models::{Item, InventoryReport};
use crate::database::queries;
use crate::error::Result;
use super::store::Inventory;

impl Inventory {
    /// Insert a new item or fully replace an existing one with the
    /// same name
    ///
    /// Replacement is whole-row; no field-level merge. Callers are
    /// expected to have validated the item (non-empty name, positive
    /// quantity and price) via the validation module.
    pub fn upsert(&self, item: &Item) -> Result<()> {
        queries::upsert_item(self.connection()?, item)?;
        debug!(name = %item.name, "item upserted");
        Ok(())
    }

    /// Get a single item by exact name
    pub fn get(&self, name: &str) -> Result<Option<Item>> {
        queries::get_item(self.connection()?, name)
    }

    /// Remove the item matching `name` exactly
    ///
    /// Returns the number of rows removed (0 or 1). A missing item is
    /// a normal outcome, not an error.
    pub fn delete(&self, name: &str) -> Result<usize> {
        let removed = queries::delete_item(self.connection()?, name)?;
        debug!(name, removed, "item delete");
        Ok(removed)
    }

    /// Replace quantity and price of an existing item in place
    ///
    /// Name and category are untouched. Returns `false` when no row
    /// matches `name`; the stored set is then unchanged.
    pub fn edit(&self, name: &str, new_quantity: f64, new_price: f64) -> Result<bool> {
        let rows = queries::update_item(self.connection()?, name, new_quantity, new_price)?;
        debug!(name, found = rows > 0, "item edit");
        Ok(rows > 0)
    }

    /// Find all items whose name or category contains `term` as a
    /// substring
    ///
    /// Matching is ASCII-case-insensitive, SQLite's LIKE default. An
    /// empty term matches every row; an empty result set is a normal
    /// outcome.
    pub fn search(&self, term: &str) -> Result<Vec<Item>> {
        queries::search_items(self.connection()?, term)
    }

    /// Every stored item plus the total inventory value
    pub fn list_all(&self) -> Result<InventoryReport> {
        let items = queries::get_all_items(self.connection()?)?;
        let total_value = items.iter().map(Item::value).sum();

        Ok(InventoryReport { items, total_value })
    }
}
