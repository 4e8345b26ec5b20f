//! Error types for store operations.

use docket_types::ItemId;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No item has this id.
    #[error("no item found for id: {id}")]
    NotFound { id: ItemId },

    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Convenience type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
