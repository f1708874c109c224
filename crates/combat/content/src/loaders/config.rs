//! Combat configuration loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`CombatConfig`] from TOML files.
///
/// Every section and field is optional; missing values keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse combat config TOML: {}", e))?;
        validate(&config)?;
        Ok(config)
    }
}

fn validate(config: &CombatConfig) -> LoadResult<()> {
    if config.ai.flee_threshold_percent > 100 || config.ai.low_hp_percent > 100 {
        anyhow::bail!("ai thresholds are percentages and must not exceed 100");
    }
    if config.check.fumble_roll >= config.check.critical_roll {
        anyhow::bail!(
            "fumble_roll ({}) must be below critical_roll ({})",
            config.check.fumble_roll,
            config.check.critical_roll
        );
    }
    Ok(())
}
