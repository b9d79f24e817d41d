//! Business logic layer for Stockroom
//!
//! This module provides the high-level Inventory API for managing
//! stored items.

pub mod store;
pub mod items;

pub use store::Inventory;
