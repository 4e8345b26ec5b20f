//! Hydration: embedding the referenced actor into item responses.
//!
//! An unset reference and a reference to a missing actor both hydrate to
//! `actor: None`. Neither is an error.

use docket_store::ActorDirectory;
use docket_types::{HydratedItem, Item};

/// Hydrate one item with a direct directory lookup.
pub fn hydrate(item: Item, actors: &ActorDirectory) -> HydratedItem {
    let actor = item
        .assignee_id
        .and_then(|id| actors.lookup(id))
        .cloned();

    HydratedItem {
        id: item.id,
        title: item.title,
        actor,
    }
}

/// Hydrate a batch of items, preserving order.
///
/// The directory is indexed once up front, so a batch of N items against R
/// actors costs O(N + R).
pub fn hydrate_all(items: Vec<Item>, actors: &ActorDirectory) -> Vec<HydratedItem> {
    let by_id = actors.as_map();

    items
        .into_iter()
        .map(|item| {
            let actor = item
                .assignee_id
                .and_then(|id| by_id.get(&id))
                .map(|&actor| actor.clone());

            HydratedItem {
                id: item.id,
                title: item.title,
                actor,
            }
        })
        .collect()
}
