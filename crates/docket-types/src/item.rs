use serde::{Deserialize, Deserializer, Serialize};

use crate::actor::Actor;
use crate::identity::{ActorId, ItemId};

/// A stored item record.
///
/// `assignee_id` is a plain reference: nothing guarantees that an actor with
/// that id exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub assignee_id: Option<ActorId>,
}

/// Mutable fields of an item, as decoded from a create or update request.
///
/// Updates apply every field: an absent `assigneeId` clears the reference.
/// An absent or `null` title decodes as empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub assignee_id: Option<ActorId>,
}

impl ItemInput {
    pub fn new(title: impl Into<String>, assignee_id: Option<i64>) -> Self {
        Self {
            title: title.into(),
            assignee_id: assignee_id.map(ActorId::new),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response view of an item with its referenced actor resolved.
///
/// Never stored; rebuilt on every read. The actor travels under the
/// `assignee` key and is `null` when the item has no reference or the
/// reference does not resolve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydratedItem {
    pub id: ItemId,
    pub title: String,
    #[serde(rename = "assignee")]
    pub actor: Option<Actor>,
}
