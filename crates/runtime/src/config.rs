//! Runtime settings read from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration shared by the runtime and its service calls.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Game seed mixed into every roll. Overrides an encounter's own seed.
    pub seed: Option<u64>,
    /// Upper bound on one narration call.
    pub narration_timeout: Duration,
    /// Upper bound on one classification call.
    pub classification_timeout: Duration,
    /// Capacity of each event bus topic.
    pub event_buffer_size: usize,
    /// Optional TOML file with combat tunables.
    pub combat_config_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            narration_timeout: Duration::from_millis(250),
            classification_timeout: Duration::from_millis(250),
            event_buffer_size: 100,
            combat_config_path: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COMBAT_SEED` - Game seed (default: the encounter's seed, else 0)
    /// - `NARRATION_TIMEOUT_MS` - Narration timeout (default: 250)
    /// - `CLASSIFICATION_TIMEOUT_MS` - Classification timeout (default: 250)
    /// - `EVENT_BUFFER_SIZE` - Event bus capacity per topic (default: 100)
    /// - `COMBAT_CONFIG_PATH` - Combat tunables TOML (default: built-in values)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("COMBAT_SEED");
        if let Some(ms) = read_env::<u64>("NARRATION_TIMEOUT_MS") {
            config.narration_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("CLASSIFICATION_TIMEOUT_MS") {
            config.classification_timeout = Duration::from_millis(ms);
        }
        if let Some(capacity) = read_env::<usize>("EVENT_BUFFER_SIZE") {
            config.event_buffer_size = capacity.max(1);
        }
        config.combat_config_path = env::var("COMBAT_CONFIG_PATH").ok().map(PathBuf::from);

        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_narration_timeout(mut self, timeout: Duration) -> Self {
        self.narration_timeout = timeout;
        self
    }

    pub fn with_classification_timeout(mut self, timeout: Duration) -> Self {
        self.classification_timeout = timeout;
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
