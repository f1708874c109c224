//! Asynchronous seams for optional text services.
//!
//! Both services may be backed by a remote model with no availability
//! guarantee. Each ships with an always-available default so the runtime
//! never needs to special-case an absent backend.
use async_trait::async_trait;
use combat_core::{
    AttackResult, ClassifierError, EntityId, KeywordClassifier, SkillClassifier, SkillName,
};
use serde::Serialize;

use super::errors::NarratorError;

/// Maps free-text action descriptions to a skill.
#[async_trait]
pub trait ClassifierService: Send + Sync {
    async fn classify(&self, action_text: &str) -> Result<SkillName, ClassifierError>;
}

/// Default classifier service: the core keyword table, answered inline.
#[derive(Clone, Debug, Default)]
pub struct KeywordClassifierService {
    classifier: KeywordClassifier,
}

#[async_trait]
impl ClassifierService for KeywordClassifierService {
    async fn classify(&self, action_text: &str) -> Result<SkillName, ClassifierError> {
        self.classifier.classify(action_text)
    }
}

/// Everything a narrator may describe about one resolved attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NarrationRequest {
    pub attacker: EntityId,
    pub attacker_name: String,
    pub defender: EntityId,
    pub defender_name: String,
    pub skill: SkillName,
    pub result: AttackResult,
    /// Damage applied because resolution failed.
    pub fallback_damage: Option<u32>,
    pub defender_died: bool,
}

/// Produces flavour text for resolved attacks.
///
/// Output is display-only; it never feeds back into combat state.
#[async_trait]
pub trait Narrator: Send + Sync {
    async fn narrate(&self, request: &NarrationRequest) -> Result<String, NarratorError>;
}

/// Deterministic narrator used by default and as the fallback template.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateNarrator;

impl TemplateNarrator {
    pub fn render(request: &NarrationRequest) -> String {
        let NarrationRequest {
            attacker_name,
            defender_name,
            skill,
            ..
        } = request;

        let mut line = match &request.result {
            AttackResult::Hit {
                damage,
                damage_type,
                critical,
            } => {
                let verb = if *critical { "critically hits" } else { "hits" };
                let amount = format!("{damage} {damage_type} damage");
                format!("{attacker_name} {verb} {defender_name} using {skill} for {amount}.")
            }
            AttackResult::Miss { was_dodged: true } => {
                format!("{defender_name} dodges {attacker_name}'s {skill} attack.")
            }
            AttackResult::Miss { was_dodged: false } => {
                format!("{attacker_name} misses {defender_name}.")
            }
            AttackResult::Failure { .. } => match request.fallback_damage {
                Some(damage) => format!(
                    "{attacker_name} lands a clumsy blow on {defender_name} for {damage} damage."
                ),
                None => format!("{attacker_name} fumbles the attack on {defender_name}."),
            },
        };

        if request.defender_died {
            line.push_str(&format!(" {defender_name} falls."));
        }
        line
    }
}

#[async_trait]
impl Narrator for TemplateNarrator {
    async fn narrate(&self, request: &NarrationRequest) -> Result<String, NarratorError> {
        Ok(Self::render(request))
    }
}
