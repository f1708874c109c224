//! Passive → Hostile transitions and admission to the turn queue.
//!
//! [`GameEngine::trigger_counter_attack`] is the only place an NPC becomes
//! schedulable. Disposition collapse reaches it through
//! [`GameEngine::adjust_disposition`].

use crate::log::CombatEvent;
use crate::schedule::ActionKind;
use crate::state::{Disposition, EntityId, LocationId, Standing, Tick};

use super::{EngineError, GameEngine};

/// What a hostility trigger changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostilityChange {
    /// Passive NPC turned hostile and was queued.
    BecameHostile { ready_at: Tick },
    /// Already hostile but unscheduled; it was queued.
    Admitted { ready_at: Tick },
    /// Already hostile and queued; nothing changed.
    Unchanged,
}

impl HostilityChange {
    pub fn ready_at(&self) -> Option<Tick> {
        match self {
            Self::BecameHostile { ready_at } | Self::Admitted { ready_at } => Some(*ready_at),
            Self::Unchanged => None,
        }
    }
}

impl GameEngine<'_, '_> {
    /// Forces `npc` into hostile standing and admits it to the turn queue at
    /// `clock + cost(MeleeAttack)`.
    ///
    /// Idempotent: an NPC that is already hostile and queued keeps its
    /// existing entry untouched.
    pub fn trigger_counter_attack(
        &mut self,
        npc: EntityId,
        location: LocationId,
    ) -> Result<HostilityChange, EngineError> {
        let actor = self.living(npc)?;
        if !actor.is_npc() {
            return Err(EngineError::NotAnNpc(npc));
        }
        if actor.location != location {
            return Err(EngineError::NotAtLocation {
                actor: npc,
                location,
            });
        }
        let was_hostile = actor.is_hostile();
        let queued = self.state.queue.contains(npc);

        if was_hostile && queued {
            return Ok(HostilityChange::Unchanged);
        }

        if !was_hostile {
            let threshold = self.env.config().disposition.hostility_threshold;
            if let Some(actor) = self.state.world.actor_mut(npc) {
                let from = actor.disposition.score();
                actor.standing = Standing::Hostile;
                actor.disposition = Disposition::new(from.min(threshold));
                let to = actor.disposition.score();
                if from != to {
                    self.record(CombatEvent::DispositionChanged {
                        actor: npc,
                        from,
                        to,
                    });
                }
            }
            self.record(CombatEvent::BecameHostile { actor: npc });
        }

        let ready_at = if queued {
            self.state.queue.ready_at(npc).unwrap_or(self.clock())
        } else {
            self.schedule_after(npc, ActionKind::MeleeAttack)?
        };

        Ok(if was_hostile {
            HostilityChange::Admitted { ready_at }
        } else {
            HostilityChange::BecameHostile { ready_at }
        })
    }

    /// Admits every living hostile NPC that is not yet queued.
    ///
    /// Used when an encounter starts with NPCs that are hostile from the
    /// outset, so that every hostile NPC is either queued or dead.
    pub fn admit_hostiles(&mut self) -> Vec<(EntityId, HostilityChange)> {
        let pending: Vec<_> = self
            .state
            .world
            .actors()
            .filter(|actor| actor.is_npc() && actor.is_hostile() && !actor.is_dead())
            .filter(|actor| !self.state.queue.contains(actor.id))
            .map(|actor| (actor.id, actor.location))
            .collect();

        pending
            .into_iter()
            .filter_map(|(npc, location)| {
                self.trigger_counter_attack(npc, location)
                    .ok()
                    .map(|change| (npc, change))
            })
            .collect()
    }

    /// Shifts `npc`'s disposition by `delta`, saturating at ±100.
    ///
    /// A passive NPC whose score ends at or below the hostility threshold
    /// turns hostile; the resulting change is returned.
    pub fn adjust_disposition(
        &mut self,
        npc: EntityId,
        delta: i32,
    ) -> Result<Option<HostilityChange>, EngineError> {
        let actor = self.living(npc)?;
        if !actor.is_npc() {
            return Err(EngineError::NotAnNpc(npc));
        }
        let location = actor.location;
        let was_hostile = actor.is_hostile();
        let from = actor.disposition.score();
        let to = actor.disposition.adjusted(delta).score();

        if from != to {
            if let Some(actor) = self.state.world.actor_mut(npc) {
                actor.disposition = Disposition::new(to);
            }
            self.record(CombatEvent::DispositionChanged {
                actor: npc,
                from,
                to,
            });
        }

        let threshold = self.env.config().disposition.hostility_threshold;
        if !was_hostile && to <= threshold {
            return self.trigger_counter_attack(npc, location).map(Some);
        }
        Ok(None)
    }
}
