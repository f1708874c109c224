//! Execution of non-attack NPC decisions.

use crate::ai::AiDecision;
use crate::log::CombatEvent;
use crate::state::{EntityId, ItemId, LocationId};

use super::{GameEngine, StrikeReport};

/// Text NPC attacks are classified from; the weapon skill takes over when
/// the classification is generic.
const NPC_ATTACK_TEXT: &str = "attack";

impl GameEngine<'_, '_> {
    /// Carries out `decision` for `actor`.
    ///
    /// `Err` carries a reason for a decision that could not be carried out;
    /// the sweep records it and treats the turn as a wait.
    pub(super) fn execute_decision(
        &mut self,
        actor: EntityId,
        decision: &AiDecision,
    ) -> Result<Option<StrikeReport>, String> {
        match decision {
            AiDecision::Attack { target } => {
                Ok(Some(self.strike(actor, *target, NPC_ATTACK_TEXT)))
            }
            AiDecision::Defend => {
                self.defend(actor)?;
                Ok(None)
            }
            AiDecision::UseItem { item } => {
                self.use_item(actor, *item)?;
                Ok(None)
            }
            AiDecision::Flee { to } => {
                self.flee(actor, *to)?;
                Ok(None)
            }
            AiDecision::Wait => {
                self.record(CombatEvent::Waited {
                    actor,
                    kind: decision.action_kind(),
                });
                Ok(None)
            }
            AiDecision::Error { reason } => Err(reason.clone()),
        }
    }

    fn defend(&mut self, actor: EntityId) -> Result<(), String> {
        let state = self
            .state
            .world
            .actor_mut(actor)
            .ok_or_else(|| format!("actor {actor} not found"))?;
        state.defending = true;
        self.record(CombatEvent::Defended { actor });
        Ok(())
    }

    /// Consumes one `item` from the inventory and heals by its amount.
    fn use_item(&mut self, actor: EntityId, item: ItemId) -> Result<(), String> {
        let items = self.env.items().map_err(|error| error.to_string())?;
        let heal = items
            .healing(item)
            .ok_or_else(|| format!("{item} does not heal"))?;

        let state = self
            .state
            .world
            .actor_mut(actor)
            .ok_or_else(|| format!("actor {actor} not found"))?;
        let slot = state
            .inventory
            .iter()
            .position(|&carried| carried == item)
            .ok_or_else(|| format!("{actor} does not carry {item}"))?;
        state.inventory.remove(slot);
        let healed = state.combat.heal(heal);

        self.record(CombatEvent::UsedItem {
            actor,
            item,
            healed,
        });
        Ok(())
    }

    /// Moves `actor` through an exit of its current location.
    fn flee(&mut self, actor: EntityId, to: LocationId) -> Result<(), String> {
        let from = self
            .state
            .world
            .actor(actor)
            .map(|state| state.location)
            .ok_or_else(|| format!("actor {actor} not found"))?;
        let reachable = self
            .state
            .world
            .location(from)
            .is_some_and(|location| location.exits.contains(&to));
        if !reachable {
            return Err(format!("no exit from {from} to {to}"));
        }

        if let Some(state) = self.state.world.actor_mut(actor) {
            state.location = to;
        }
        self.record(CombatEvent::Fled { actor, from, to });
        Ok(())
    }
}
