use std::collections::BTreeMap;

use super::{ActorState, EntityId, LocationId};

/// A room actors can share. Exits make fleeing possible.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exits: Vec<LocationId>,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            exits: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_exit(mut self, exit: LocationId) -> Self {
        self.exits.push(exit);
        self
    }
}

/// Authoritative entity storage.
///
/// Ordered maps keep iteration deterministic so identical inputs produce
/// identical combat logs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldState {
    actors: BTreeMap<EntityId, ActorState>,
    locations: BTreeMap<LocationId, Location>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_location(&mut self, location: Location) {
        self.locations.insert(location.id, location);
    }

    /// Spawns an actor, replacing any previous actor with the same id.
    pub fn spawn(&mut self, actor: ActorState) -> Option<ActorState> {
        self.actors.insert(actor.id, actor)
    }

    /// Removes an actor from entity storage and returns it.
    pub fn remove(&mut self, id: EntityId) -> Option<ActorState> {
        self.actors.remove(&id)
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.actors.get(&id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.actors.get_mut(&id)
    }

    pub fn player(&self) -> Option<&ActorState> {
        self.actor(EntityId::PLAYER)
    }

    pub fn player_location(&self) -> Option<LocationId> {
        self.player().map(|player| player.location)
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.actors.contains_key(&id)
    }

    pub fn actors(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.values()
    }

    /// Actors currently standing in `location`, in id order.
    pub fn actors_at(&self, location: LocationId) -> impl Iterator<Item = &ActorState> {
        self.actors
            .values()
            .filter(move |actor| actor.location == location)
    }

    /// Finds a living actor by case-insensitive name.
    pub fn find_by_name(&self, name: &str) -> Option<&ActorState> {
        self.actors
            .values()
            .find(|actor| !actor.is_dead() && actor.name.eq_ignore_ascii_case(name))
    }

    /// True when `id` stands in the same location as the player.
    pub fn is_with_player(&self, id: EntityId) -> bool {
        match (self.actor(id), self.player_location()) {
            (Some(actor), Some(location)) => actor.location == location,
            _ => false,
        }
    }
}
