//! In-memory item store.
//!
//! [`InMemoryItemStore`] keeps items in a `Vec` (insertion order) with a
//! `HashMap` index from id to position, all behind a single `Mutex`. Data is
//! lost when the store is dropped.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use docket_types::{ActorId, Item, ItemId};

use crate::error::{Result, StoreError};
use crate::traits::ItemStore;

#[derive(Debug)]
struct Inner {
    items: Vec<Item>,
    positions: HashMap<ItemId, usize>,
    next_id: i64,
}

/// An in-memory implementation of [`ItemStore`].
///
/// Ids come from a counter starting at 1 that lives under the same lock as
/// the items, so two creates can never observe the same value.
#[derive(Debug)]
pub struct InMemoryItemStore {
    inner: Mutex<Inner>,
}

impl InMemoryItemStore {
    /// Create a new empty item store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: Vec::new(),
                positions: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn create(&self, title: String, assignee_id: Option<ActorId>) -> Result<Item> {
        let mut inner = self.lock()?;

        let id = ItemId::new(inner.next_id);
        inner.next_id += 1;

        let item = Item {
            id,
            title,
            assignee_id,
        };
        let position = inner.items.len();
        inner.items.push(item.clone());
        inner.positions.insert(id, position);

        tracing::trace!(%id, position, "item appended");
        Ok(item)
    }

    fn list_all(&self) -> Result<Vec<Item>> {
        let inner = self.lock()?;
        Ok(inner.items.clone())
    }

    fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        let inner = self.lock()?;
        Ok(inner
            .positions
            .get(&id)
            .map(|&position| inner.items[position].clone()))
    }

    fn update(&self, id: ItemId, title: String, assignee_id: Option<ActorId>) -> Result<Item> {
        let mut inner = self.lock()?;

        let position = *inner
            .positions
            .get(&id)
            .ok_or(StoreError::NotFound { id })?;

        let item = &mut inner.items[position];
        item.title = title;
        item.assignee_id = assignee_id;

        tracing::trace!(%id, position, "item overwritten");
        Ok(item.clone())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.lock()?.items.len())
    }
}
