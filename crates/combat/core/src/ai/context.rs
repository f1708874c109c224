//! Blackboard handed to decision trees.

use crate::config::AiRules;
use crate::env::ItemOracle;
use crate::state::{ActorState, EntityId, ItemId, Location, LocationId, WorldState};

use super::AiDecision;

/// Read-only snapshot of one actor's situation plus the slot for its choice.
pub struct DecisionContext<'a> {
    pub actor: &'a ActorState,
    pub world: &'a WorldState,
    pub location: &'a Location,
    pub items: Option<&'a dyn ItemOracle>,
    pub rules: &'a AiRules,
    decision: Option<AiDecision>,
}

impl<'a> DecisionContext<'a> {
    pub fn new(
        actor: &'a ActorState,
        world: &'a WorldState,
        location: &'a Location,
        items: Option<&'a dyn ItemOracle>,
        rules: &'a AiRules,
    ) -> Self {
        Self {
            actor,
            world,
            location,
            items,
            rules,
            decision: None,
        }
    }

    pub fn hp_percent(&self) -> u32 {
        self.actor.combat.hp_percent()
    }

    pub fn below_flee_threshold(&self) -> bool {
        self.hp_percent() < self.rules.flee_threshold_percent
    }

    pub fn below_low_hp(&self) -> bool {
        self.hp_percent() < self.rules.low_hp_percent
    }

    pub fn is_hostile(&self) -> bool {
        self.actor.is_hostile()
    }

    /// The living player, if standing in this actor's location.
    pub fn co_located_player(&self) -> Option<EntityId> {
        self.world
            .player()
            .filter(|player| !player.is_dead() && player.location == self.actor.location)
            .map(|player| player.id)
    }

    /// First exit of the current location. Flee is viable iff this is `Some`.
    pub fn flee_exit(&self) -> Option<LocationId> {
        self.location.exits.first().copied()
    }

    /// First carried consumable that restores hp.
    pub fn healing_item(&self) -> Option<ItemId> {
        let items = self.items?;
        self.actor
            .inventory
            .iter()
            .copied()
            .find(|&item| items.healing(item).is_some())
    }

    pub fn decide(&mut self, decision: AiDecision) -> bool {
        self.decision = Some(decision);
        true
    }

    pub fn into_decision(self) -> Option<AiDecision> {
        self.decision
    }
}
