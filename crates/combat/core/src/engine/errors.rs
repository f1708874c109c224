//! Engine errors.
//!
//! Only caller mistakes surface here (unknown target, dead player, ...).
//! Resolution problems are carried inside `AttackResult::Failure` and
//! per-actor sweep problems inside `SweepEvent`; neither is raised.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, LocationId, Tick};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    #[error("actor {0} is dead")]
    ActorDead(EntityId),

    #[error("actor {0} is not an npc")]
    NotAnNpc(EntityId),

    #[error("actor {actor} is not at {location}")]
    NotAtLocation {
        actor: EntityId,
        location: LocationId,
    },

    #[error("actor {0} cannot target itself")]
    SelfTarget(EntityId),

    #[error("the player has not been spawned")]
    PlayerMissing,

    #[error("the player is dead")]
    PlayerDead,

    #[error("cannot schedule {actor} at {ready_at}: clock is already at {clock}")]
    ScheduleInPast {
        actor: EntityId,
        ready_at: Tick,
        clock: Tick,
    },
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActorNotFound(_)
            | Self::ActorDead(_)
            | Self::NotAnNpc(_)
            | Self::NotAtLocation { .. }
            | Self::SelfTarget(_)
            | Self::ScheduleInPast { .. } => ErrorSeverity::Validation,
            Self::PlayerMissing => ErrorSeverity::Internal,
            Self::PlayerDead => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "ENGINE_ACTOR_NOT_FOUND",
            Self::ActorDead(_) => "ENGINE_ACTOR_DEAD",
            Self::NotAnNpc(_) => "ENGINE_NOT_AN_NPC",
            Self::NotAtLocation { .. } => "ENGINE_NOT_AT_LOCATION",
            Self::SelfTarget(_) => "ENGINE_SELF_TARGET",
            Self::PlayerMissing => "ENGINE_PLAYER_MISSING",
            Self::PlayerDead => "ENGINE_PLAYER_DEAD",
            Self::ScheduleInPast { .. } => "ENGINE_SCHEDULE_IN_PAST",
        }
    }
}
