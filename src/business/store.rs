//! Main Inventory API
//!
//! This module provides the primary interface for interacting with
//! an inventory database.

use std::path::{Path, PathBuf};
use rusqlite::Connection;
use tracing::debug;
use crate::database::Database;
use crate::error::{InventoryError, Result};

/// Main inventory store interface
pub struct Inventory {
    /// Path to the database file
    pub(crate) path: PathBuf,
    /// Database connection
    pub(crate) db: Option<Database>,
}

impl Inventory {
    /// Open an inventory store at the specified path
    ///
    /// Creates the database file and the inventory table if they do
    /// not exist yet.
    pub fn open(path: &Path) -> Result<Self> {
        let db = Database::open(path)?;
        debug!(path = %path.display(), "opened inventory database");

        Ok(Self {
            path: path.to_path_buf(),
            db: Some(db),
        })
    }

    /// Close the store, releasing the connection
    ///
    /// Safe to call once at shutdown; later operations report a
    /// storage error.
    pub fn close(&mut self) {
        if let Some(mut db) = self.db.take() {
            db.close();
            debug!(path = %self.path.display(), "closed inventory database");
        }
    }

    /// Check if the store is open
    pub fn is_open(&self) -> bool {
        self.db.is_some()
    }

    /// Get the database path
    pub fn database_path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn connection(&self) -> Result<&Connection> {
        self.db
            .as_ref()
            .ok_or_else(|| InventoryError::StorageError("Database not open".to_string()))?
            .connection()
    }
}

impl Drop for Inventory {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    pub fn create_test_inventory() -> (Inventory, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let inventory = Inventory::open(&temp_dir.path().join("inventory.db")).unwrap();
        (inventory, temp_dir)
    }

    #[test]
    fn test_open() {
        let (inventory, temp) = create_test_inventory();
        assert!(inventory.is_open());
        assert_eq!(inventory.database_path(), temp.path().join("inventory.db"));
    }

    #[test]
    fn test_open_unwritable_path() {
        let result = Inventory::open(Path::new("/nonexistent-dir/inventory.db"));
        assert!(matches!(result, Err(InventoryError::StorageUnavailable(_))));
    }

    #[test]
    fn test_close() {
        let (mut inventory, _temp) = create_test_inventory();
        inventory.close();
        assert!(!inventory.is_open());
        assert!(inventory.connection().is_err());
    }

    #[test]
    fn test_operation_after_close_reports_storage_error() {
        let (mut inventory, _temp) = create_test_inventory();
        inventory.close();

        let result = inventory.list_all();
        assert!(matches!(result, Err(InventoryError::StorageError(_))));
    }
}
