//! Content loaders for reading combat data from files.
//!
//! Configuration is TOML; item catalogs and encounters are RON.

pub mod config;
pub mod encounter;
pub mod item;

pub use config::ConfigLoader;
pub use encounter::{ActorSpec, EncounterLoader, EncounterSpec, LocationSpec, ScriptStep};
pub use item::{ItemCatalog, ItemLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
