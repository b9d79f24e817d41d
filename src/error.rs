//! Error types for Stockroom

use thiserror::Error;

/// Main error type for inventory operations
#[derive(Error, Debug)]
pub enum InventoryError {
    /// Backing database file could not be opened or initialized
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Database operation failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Malformed or out-of-range input
    #[error("Invalid input: {0}")]
    ValidationError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<rusqlite::Error> for InventoryError {
    fn from(err: rusqlite::Error) -> Self {
        InventoryError::StorageError(err.to_string())
    }
}

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
