//! Skirmish demo binary.
//!
//! Composition root: loads `.env`, client and runtime configuration and the
//! content files, then plays the encounter's scripted turns, printing the
//! narration and finally the full combat log.
//!
//! ```bash
//! COMBAT_SEED=42 RUST_LOG=runtime=debug cargo run -p skirmish-client
//! ```
mod config;
mod logging;
mod play;

use std::io::Write;

use anyhow::{Context, Result};
use combat_content::{EncounterLoader, ItemLoader};
use runtime::{CombatRuntime, ItemOracleImpl, RuntimeConfig, Topic};
use tokio::sync::broadcast::error::RecvError;

use crate::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    let mut runtime_config = RuntimeConfig::from_env();
    if runtime_config.combat_config_path.is_none() {
        runtime_config.combat_config_path = Some(config.content_path("config.toml"));
    }

    let items_path = config.content_path("items.ron");
    let items = ItemLoader::load(&items_path)
        .with_context(|| format!("loading items from {}", items_path.display()))?;
    let encounter_path = config.encounter_path();
    let encounter = EncounterLoader::load(&encounter_path)
        .with_context(|| format!("loading encounter from {}", encounter_path.display()))?;

    tracing::info!(
        encounter = %encounter.name,
        items = items.len(),
        steps = encounter.script.len(),
        "content loaded"
    );

    let name = encounter.name.clone();
    let script = encounter.script.clone();
    let mut runtime = CombatRuntime::builder()
        .config(runtime_config)
        .encounter(encounter)
        .items(ItemOracleImpl::from_definitions(items))
        .build()?;

    trace_events(&runtime);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "== {} (seed {}) ==", name, runtime.seed())?;

    let outcome = play::run_script(&mut runtime, &script, &mut stdout).await?;

    writeln!(stdout, "\n-- combat log --")?;
    write!(stdout, "{}", runtime.combat_log().render())?;
    writeln!(stdout, "\n{outcome}")?;

    tracing::info!(?outcome, clock = %runtime.clock(), "encounter finished");
    Ok(())
}

/// Mirrors combat events into the log file as JSON lines.
fn trace_events(runtime: &CombatRuntime) {
    let mut events = runtime.subscribe(Topic::Combat);
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => match event.to_json() {
                    Ok(json) => tracing::debug!(target: "skirmish::events", "{json}"),
                    Err(error) => tracing::warn!(%error, "event not serializable"),
                },
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event trace lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });
}
