//! The read-only actor directory.

use std::collections::HashMap;

use docket_types::{default_actors, Actor, ActorId};

/// Fixed set of actors, established at construction.
///
/// Keeps the seed order for listing. There is no way to add, change or
/// remove an actor after construction.
#[derive(Clone, Debug)]
pub struct ActorDirectory {
    actors: Vec<Actor>,
}

impl ActorDirectory {
    /// Build a directory from a seed list.
    ///
    /// If an id appears more than once, the first record wins.
    pub fn new(seed: impl IntoIterator<Item = Actor>) -> Self {
        let mut actors: Vec<Actor> = Vec::new();
        for actor in seed {
            if actors.iter().any(|a| a.id == actor.id) {
                tracing::warn!(id = %actor.id, name = %actor.name, "duplicate actor id in seed, ignoring");
                continue;
            }
            actors.push(actor);
        }
        Self { actors }
    }

    /// A directory holding the default seed.
    pub fn seeded() -> Self {
        Self::new(default_actors())
    }

    /// Find an actor by id with a linear scan.
    pub fn lookup(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    /// Index every actor by id.
    ///
    /// Build this once per batch and reuse it, rather than calling
    /// [`lookup`](Self::lookup) per item.
    pub fn as_map(&self) -> HashMap<ActorId, &Actor> {
        self.actors.iter().map(|a| (a.id, a)).collect()
    }

    /// Actors in seed order.
    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl Default for ActorDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
