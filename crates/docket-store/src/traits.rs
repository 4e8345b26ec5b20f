//! The [`ItemStore`] trait defining the item storage interface.

use docket_types::{ActorId, Item, ItemId};

use crate::error::Result;

/// Storage backend for item records.
///
/// Implementations must be thread-safe (`Send + Sync`). Every call is one
/// critical section: concurrent creates, updates and reads never observe a
/// half-applied change.
pub trait ItemStore: Send + Sync {
    /// Append a new item and return it.
    ///
    /// The id is fresh for the lifetime of the store and is never handed out
    /// again.
    fn create(&self, title: String, assignee_id: Option<ActorId>) -> Result<Item>;

    /// All items in insertion order.
    fn list_all(&self) -> Result<Vec<Item>>;

    /// Look up an item by id.
    ///
    /// Returns `Ok(None)` if no item has this id.
    fn find_by_id(&self, id: ItemId) -> Result<Option<Item>>;

    /// Replace the title and assignee of an existing item.
    ///
    /// Both fields are overwritten; `None` clears the assignee. Fails with
    /// [`StoreError::NotFound`](crate::StoreError::NotFound) and leaves the
    /// store untouched if no item has this id.
    fn update(&self, id: ItemId, title: String, assignee_id: Option<ActorId>) -> Result<Item>;

    /// Number of stored items.
    fn len(&self) -> Result<usize> {
        Ok(self.list_all()?.len())
    }

    /// Returns `true` if no item has been created.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
