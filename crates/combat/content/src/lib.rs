//! Data-driven combat content.
//!
//! Loaders turn TOML/RON files into `combat-core` values: the tunable
//! [`combat_core::CombatConfig`], the item catalog and encounter definitions
//! (locations, actors, scripted player turns).
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, EncounterLoader, EncounterSpec, ItemCatalog, ItemLoader, LoadResult,
    ScriptStep,
};
