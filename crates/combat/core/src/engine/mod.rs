//! Single owner of combat state mutation.
//!
//! [`GameEngine`] borrows the [`GameState`] mutably together with a read-only
//! [`CombatEnv`]. Every state change (damage, death, hostility, scheduling,
//! clock advancement) goes through it and is recorded in the combat log.
//!
//! A player turn is `player_attack` (or `player_wait`) followed by
//! [`GameEngine::run_sweep`], which drains every NPC whose turn has come.

mod actions;
mod errors;
mod hostility;
mod strike;
mod sweep;

pub use errors::EngineError;
pub use hostility::HostilityChange;
pub use strike::StrikeReport;
pub use sweep::{SkipReason, SweepEvent, SweepReport};

use crate::env::CombatEnv;
use crate::log::CombatEvent;
use crate::schedule::{ActionKind, calculate_action_cost};
use crate::state::{ActorState, EntityId, GameState, Tick};

pub struct GameEngine<'a, 'e> {
    state: &'a mut GameState,
    env: CombatEnv<'e>,
}

impl<'a, 'e> GameEngine<'a, 'e> {
    pub fn new(state: &'a mut GameState, env: CombatEnv<'e>) -> Self {
        Self { state, env }
    }

    pub fn state(&self) -> &GameState {
        &*self.state
    }

    pub fn env(&self) -> &CombatEnv<'e> {
        &self.env
    }

    pub fn clock(&self) -> Tick {
        self.state.turn.clock
    }

    /// Tick cost of `kind` for `actor`, from its current speed level.
    pub fn action_cost(&self, actor: EntityId, kind: ActionKind) -> Result<u64, EngineError> {
        let actor = self.actor(actor)?;
        Ok(calculate_action_cost(
            kind,
            actor.skills.speed_level(),
            &self.env.config().costs,
        ))
    }

    /// Places `actor` in the turn queue at `ready_at`, superseding any
    /// existing entry.
    ///
    /// Dead or missing actors are refused, and so is a tick that is not in the
    /// future.
    pub fn schedule(&mut self, actor: EntityId, ready_at: Tick) -> Result<(), EngineError> {
        self.living(actor)?;
        let clock = self.clock();
        if ready_at <= clock {
            return Err(EngineError::ScheduleInPast {
                actor,
                ready_at,
                clock,
            });
        }
        self.state.queue.enqueue(actor, ready_at);
        self.record(CombatEvent::Scheduled { actor, ready_at });
        Ok(())
    }

    /// Schedules `actor` at `clock + cost(kind)`.
    pub fn schedule_after(
        &mut self,
        actor: EntityId,
        kind: ActionKind,
    ) -> Result<Tick, EngineError> {
        let ready_at = self.clock() + self.action_cost(actor, kind)?;
        self.schedule(actor, ready_at)?;
        Ok(ready_at)
    }

    /// Removes `actor` from the turn queue. Returns whether it was queued.
    pub fn unschedule(&mut self, actor: EntityId) -> bool {
        self.state.queue.remove(actor)
    }

    fn record(&mut self, event: CombatEvent) {
        let tick = self.state.turn.clock;
        self.state.log.push(tick, event);
    }

    fn actor(&self, id: EntityId) -> Result<&ActorState, EngineError> {
        self.state
            .world
            .actor(id)
            .ok_or(EngineError::ActorNotFound(id))
    }

    fn living(&self, id: EntityId) -> Result<&ActorState, EngineError> {
        let actor = self.actor(id)?;
        if actor.is_dead() {
            return Err(EngineError::ActorDead(id));
        }
        Ok(actor)
    }

    fn living_player(&self) -> Result<&ActorState, EngineError> {
        let player = self.state.world.player().ok_or(EngineError::PlayerMissing)?;
        if player.is_dead() {
            return Err(EngineError::PlayerDead);
        }
        Ok(player)
    }
}
