//! Deterministic combat rules shared by the runtime and tooling.
//!
//! `combat-core` owns turn scheduling, attack resolution, NPC decisions and
//! hostility. It performs no I/O and no logging; every observable decision is
//! appended to the [`CombatLog`]. All state mutation flows through
//! [`engine::GameEngine`].
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod log;
pub mod schedule;
pub mod state;

#[cfg(test)]
mod testing;

pub use ai::{AiDecision, AiPreset, decide_action};
pub use combat::{
    AttackResult, ClassifierError, FailureReason, KeywordClassifier, SkillClassifier,
    StaticClassifier, classify_or_fallback, resolve_attack,
};
pub use config::{AiRules, CheckRules, CombatConfig, CostTable, DamageRules, DispositionRules};
pub use engine::{
    EngineError, GameEngine, HostilityChange, SkipReason, StrikeReport, SweepEvent, SweepReport,
};
pub use env::{
    ArmorData, CombatEnv, ConsumableData, DamageType, ItemDefinition, ItemKind, ItemOracle,
    OracleError, PcgRng, RngOracle, WeaponData,
};
pub use error::{ErrorSeverity, GameError};
pub use log::{CombatEvent, CombatLog, LogEntry};
pub use schedule::{ActionKind, TurnQueue, calculate_action_cost};
pub use state::{
    ActorKind, ActorState, CombatState, DamageOutcome, Disposition, EntityId, Equipment,
    GameState, ItemId, Location, LocationId, SkillName, SkillState, Standing, Tick, TurnState,
    WorldState,
};
