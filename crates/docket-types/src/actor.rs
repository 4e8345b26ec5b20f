use serde::{Deserialize, Serialize};

use crate::identity::ActorId;

/// A read-only reference record that items may point at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
}

impl Actor {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: ActorId::new(id),
            name: name.into(),
        }
    }
}

/// The actor set a fresh service starts with.
pub fn default_actors() -> Vec<Actor> {
    vec![
        Actor::new(1, "Larry"),
        Actor::new(2, "Curly"),
        Actor::new(3, "Moe"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_has_three_actors() {
        let actors = default_actors();
        assert_eq!(actors.len(), 3);
        assert_eq!(actors[1], Actor::new(2, "Curly"));
    }

    #[test]
    fn actor_json_shape() {
        let json = serde_json::to_value(Actor::new(3, "Moe")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 3, "name": "Moe" }));
    }
}
