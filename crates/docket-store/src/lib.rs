//! Storage for docket records.
//!
//! # Architecture
//!
//! - **Items** are mutable records owned by an [`ItemStore`]. The store
//!   allocates ids, keeps insertion order, and overwrites fields in place on
//!   update. Items are never deleted.
//! - **Actors** live in an [`ActorDirectory`], fixed at construction. Items
//!   refer to actors by id; the directory never changes in response to item
//!   operations.
//!
//! # Modules
//!
//! - [`error`] — Error types for store operations
//! - [`traits`] — The [`ItemStore`] trait defining the storage interface
//! - [`memory`] — In-memory [`InMemoryItemStore`]
//! - [`actors`] — The read-only [`ActorDirectory`]

pub mod actors;
pub mod error;
pub mod memory;
pub mod traits;

pub use actors::ActorDirectory;
pub use error::{Result, StoreError};
pub use memory::InMemoryItemStore;
pub use traits::ItemStore;
