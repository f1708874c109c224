//! Client settings read from the process environment.
use std::env;
use std::path::PathBuf;

/// Where content lives and how the session is labelled.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub content_dir: PathBuf,
    pub encounter_file: String,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../combat/content/data"),
            encounter_file: "encounter.ron".to_string(),
            session_id: None,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_CONTENT_DIR` - Content directory (config.toml, items.ron, encounters)
    /// - `SKIRMISH_ENCOUNTER` - Encounter file within the content directory (default encounter.ron)
    /// - `SKIRMISH_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `SKIRMISH_LOG_DIR` - Log directory (default: platform cache directory)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("SKIRMISH_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }
        if let Ok(file) = env::var("SKIRMISH_ENCOUNTER") {
            config.encounter_file = file;
        }
        config.session_id = env::var("SKIRMISH_SESSION_ID").ok();
        config.log_dir = env::var("SKIRMISH_LOG_DIR").ok().map(PathBuf::from);

        config
    }

    pub fn content_path(&self, file: &str) -> PathBuf {
        self.content_dir.join(file)
    }

    pub fn encounter_path(&self) -> PathBuf {
        self.content_path(&self.encounter_file)
    }
}
