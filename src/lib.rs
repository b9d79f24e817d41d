//! # Stockroom
//!
//! A single-user inventory tracker backed by SQLite.
//!
//! ## Features
//!
//! - SQLite storage behind a single persistent connection
//! - Add-or-replace, delete, edit, search, and list operations
//! - Inventory valuation (sum of quantity times unit price)
//! - Strict positive-number validation for interactive input
//!
//! ## Example
//!
//! ```no_run
//! use stockroom::{Inventory, Item};
//! use std::path::Path;
//!
//! let inventory = Inventory::open(Path::new("inventory.db")).unwrap();
//! inventory.upsert(&Item::new("Widget", 10.0, 2.5, "Tools")).unwrap();
//!
//! let report = inventory.list_all().unwrap();
//! for item in &report.items {
//!     println!("{}: {}", item.name, item.quantity);
//! }
//! println!("Total: {:.2}", report.total_value);
//! ```

pub mod database;
pub mod business;
pub mod validation;
pub mod error;

// Re-export main types
pub use error::{InventoryError, Result};
pub use database::models::{Item, InventoryReport};
pub use business::Inventory;

/// Default database filename
pub const DATABASE_FILENAME: &str = "inventory.db";
