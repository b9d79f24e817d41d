//! Database layer for Stockroom
//!
//! Handles SQLite database operations including:
//! - Schema creation
//! - Row-level access to inventory items

pub mod models;
pub mod schema;
pub mod connection;
pub mod queries;

pub use connection::Database;
pub use models::*;
