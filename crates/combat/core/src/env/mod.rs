//! Read-only capabilities consumed by resolution.
//!
//! Oracles expose item data and randomness; the classifier maps action text
//! to skills. [`CombatEnv`] bundles them with the tunable [`CombatConfig`] so
//! the engine never reaches for globals.
mod error;
mod items;
mod rng;

pub use error::OracleError;
pub use items::{
    ArmorData, ConsumableData, DamageType, ItemDefinition, ItemKind, ItemOracle, WeaponData,
};
pub use rng::{PcgRng, RngOracle, compute_seed, roll_context};

use crate::combat::{KeywordClassifier, SkillClassifier};
use crate::config::CombatConfig;

static DEFAULT_CLASSIFIER: KeywordClassifier = KeywordClassifier::new();

/// Aggregates the capabilities required by the resolver and the engine.
///
/// Items and rng are optional: their absence turns an attack into
/// `AttackResult::Failure` instead of an error. The classifier is always
/// present and defaults to [`KeywordClassifier`].
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    config: &'a CombatConfig,
    items: Option<&'a dyn ItemOracle>,
    rng: Option<&'a dyn RngOracle>,
    classifier: &'a dyn SkillClassifier,
    game_seed: u64,
}

impl<'a> CombatEnv<'a> {
    /// Creates an environment with no oracles and the keyword classifier.
    pub fn new(config: &'a CombatConfig) -> Self {
        Self {
            config,
            items: None,
            rng: None,
            classifier: &DEFAULT_CLASSIFIER,
            game_seed: 0,
        }
    }

    #[must_use]
    pub fn with_items(mut self, items: &'a dyn ItemOracle) -> Self {
        self.items = Some(items);
        self
    }

    #[must_use]
    pub fn with_rng(mut self, rng: &'a dyn RngOracle) -> Self {
        self.rng = Some(rng);
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: &'a dyn SkillClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, game_seed: u64) -> Self {
        self.game_seed = game_seed;
        self
    }

    pub fn config(&self) -> &'a CombatConfig {
        self.config
    }

    /// Returns the ItemOracle, or an error if not available.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    pub fn classifier(&self) -> &'a dyn SkillClassifier {
        self.classifier
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }
}

impl std::fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombatEnv")
            .field("config", self.config)
            .field("items", &self.items.is_some())
            .field("rng", &self.rng.is_some())
            .field("game_seed", &self.game_seed)
            .finish()
    }
}
