//! Async orchestration around the deterministic combat core.
//!
//! A turn runs in two phases. First the core mutates state synchronously:
//! the player's attack is resolved and applied, hostility is triggered and
//! every due NPC turn is swept. Only then are decorative services awaited:
//! narration runs under a timeout and degrades to templates, so it can never
//! hold back the clock or leave the state half-updated.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts [`CombatRuntime`] and its builder
//! - [`api`] exposes service seams, reports and errors
//! - [`events`] provides the topic-based event bus
//! - [`oracle`] adapts content data to core capability traits
//! - [`config`] reads runtime settings from the environment
pub mod api;
pub mod config;
pub mod events;
pub mod oracle;
pub mod runtime;

mod narration;

pub use api::{
    ClassifierService, KeywordClassifierService, NarrationLine, NarrationRequest, Narrator,
    NarratorError, Result, RuntimeError, TemplateNarrator, TurnReport,
};
pub use config::RuntimeConfig;
pub use events::{Event, EventBus, Topic, TurnEvent};
pub use oracle::ItemOracleImpl;
pub use runtime::{CombatRuntime, CombatRuntimeBuilder};
