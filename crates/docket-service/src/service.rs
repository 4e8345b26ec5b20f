use std::sync::Arc;

use docket_store::{ActorDirectory, InMemoryItemStore, ItemStore};
use docket_types::{HydratedItem, ItemId, ItemInput};

use crate::error::{ServiceError, ServiceResult};
use crate::hydrate::{hydrate, hydrate_all};

/// The four item operations, composed over an item store and an actor
/// directory.
///
/// Holds no per-request state. Cloning shares the underlying store.
#[derive(Clone)]
pub struct ItemService {
    items: Arc<dyn ItemStore>,
    actors: Arc<ActorDirectory>,
}

impl ItemService {
    pub fn new(items: Arc<dyn ItemStore>, actors: Arc<ActorDirectory>) -> Self {
        Self { items, actors }
    }

    /// A service over a fresh, empty in-memory store.
    pub fn in_memory(actors: ActorDirectory) -> Self {
        Self::new(Arc::new(InMemoryItemStore::new()), Arc::new(actors))
    }

    pub fn actors(&self) -> &ActorDirectory {
        &self.actors
    }

    /// Create an item. Always creates a new record.
    pub fn create(&self, input: ItemInput) -> ServiceResult<HydratedItem> {
        let item = self.items.create(input.title, input.assignee_id)?;
        tracing::debug!(id = %item.id, assignee = ?item.assignee_id, "item created");
        Ok(hydrate(item, &self.actors))
    }

    /// Every item, hydrated, in creation order.
    pub fn list(&self) -> ServiceResult<Vec<HydratedItem>> {
        let items = self.items.list_all()?;
        tracing::debug!(count = items.len(), "items listed");
        Ok(hydrate_all(items, &self.actors))
    }

    pub fn get(&self, id: ItemId) -> ServiceResult<HydratedItem> {
        let item = self.items.find_by_id(id)?.ok_or(ServiceError::NotFound(id))?;
        Ok(hydrate(item, &self.actors))
    }

    /// Replace the title and assignee of an existing item.
    pub fn update(&self, id: ItemId, input: ItemInput) -> ServiceResult<HydratedItem> {
        let item = self.items.update(id, input.title, input.assignee_id)?;
        tracing::debug!(%id, assignee = ?item.assignee_id, "item updated");
        Ok(hydrate(item, &self.actors))
    }
}

impl std::fmt::Debug for ItemService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemService")
            .field("actors", &self.actors.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use docket_types::Actor;

    use super::*;
    use crate::error::ErrorKind;

    fn service() -> ItemService {
        ItemService::in_memory(ActorDirectory::seeded())
    }

    #[test]
    fn create_hydrates_the_new_item() {
        let svc = service();
        let created = svc.create(ItemInput::new("My new todo", Some(2))).unwrap();
        assert_eq!(created.title, "My new todo");
        assert_eq!(created.actor, Some(Actor::new(2, "Curly")));
    }

    #[test]
    fn list_on_empty_store() {
        assert!(service().list().unwrap().is_empty());
    }

    #[test]
    fn creates_never_share_an_id() {
        let svc = service();
        let ids: HashSet<ItemId> = (0..50)
            .map(|n| svc.create(ItemInput::new(format!("t{n}"), None)).unwrap().id)
            .collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(svc.list().unwrap().len(), 50);
    }

    #[test]
    fn get_returns_the_hydrated_item() {
        let svc = service();
        let created = svc.create(ItemInput::new("a", Some(1))).unwrap();
        assert_eq!(svc.get(created.id).unwrap(), created);
    }

    #[test]
    fn get_never_created_is_not_found() {
        let svc = service();
        svc.create(ItemInput::new("a", None)).unwrap();
        let err = svc.get(ItemId::new(10)).unwrap_err();
        assert_eq!(err, ServiceError::NotFound(ItemId::new(10)));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn update_never_created_is_not_found_and_creates_nothing() {
        let svc = service();
        let err = svc
            .update(ItemId::new(10), ItemInput::new("My updated todo", None))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(svc.list().unwrap().is_empty());
    }

    #[test]
    fn update_discards_omitted_assignee() {
        let svc = service();
        let created = svc.create(ItemInput::new("a", Some(2))).unwrap();

        let updated = svc.update(created.id, ItemInput::new("b", None)).unwrap();
        assert_eq!(updated.title, "b");
        assert_eq!(updated.actor, None);
        assert_eq!(svc.get(created.id).unwrap().actor, None);
    }

    #[test]
    fn clones_share_the_store() {
        let svc = service();
        let other = svc.clone();
        svc.create(ItemInput::new("a", None)).unwrap();
        assert_eq!(other.list().unwrap().len(), 1);
    }

    #[test]
    fn separate_services_are_isolated() {
        let a = service();
        let b = service();
        a.create(ItemInput::new("a", None)).unwrap();
        assert!(b.list().unwrap().is_empty());
    }

    #[test]
    fn todo_scenario() {
        let svc = service();

        let first = svc.create(ItemInput::new("My new todo", Some(2))).unwrap();
        assert_eq!(first.actor.as_ref().map(|a| a.name.as_str()), Some("Curly"));

        let listed = svc.list().unwrap();
        assert_eq!(listed, vec![first.clone()]);

        let second = svc.create(ItemInput::new("Another todo", None)).unwrap();
        let listed = svc.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1], second);
        assert_eq!(listed[1].actor, None);

        let updated = svc
            .update(first.id, ItemInput::new("My updated todo", Some(3)))
            .unwrap();
        assert_eq!(updated.actor.as_ref().map(|a| a.name.as_str()), Some("Moe"));

        let listed = svc.list().unwrap();
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[0].title, "My updated todo");
        assert_eq!(listed[0].actor, Some(Actor::new(3, "Moe")));

        assert_eq!(svc.get(ItemId::new(10)).unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(
            svc.update(ItemId::new(10), ItemInput::new("x", None))
                .unwrap_err()
                .kind(),
            ErrorKind::NotFound
        );
    }
}
