//! Authoritative combat state.
//!
//! Actors, locations, turn bookkeeping, the turn queue and the combat log are
//! bundled in [`GameState`]. Callers read it freely but mutate it only through
//! [`crate::engine::GameEngine`].
mod actor;
mod combat;
mod common;
mod skills;
mod turn;
mod world;

pub use actor::{ActorKind, ActorState, Disposition, Equipment, Standing};
pub use combat::{CombatState, DamageOutcome};
pub use common::{EntityId, ItemId, LocationId, Tick};
pub use skills::names as skill_names;
pub use skills::{SkillName, SkillState};
pub use turn::TurnState;
pub use world::{Location, WorldState};

use crate::log::CombatLog;
use crate::schedule::TurnQueue;

/// Canonical snapshot of one encounter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub world: WorldState,
    pub turn: TurnState,
    pub queue: TurnQueue,
    pub log: CombatLog,
}

impl GameState {
    pub fn new(world: WorldState) -> Self {
        Self {
            world,
            ..Self::default()
        }
    }

    pub fn clock(&self) -> Tick {
        self.turn.clock
    }
}
