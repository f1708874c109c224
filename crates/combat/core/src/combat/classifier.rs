//! Maps free-text action descriptions to the skill that resolves them.
//!
//! [`KeywordClassifier`] is the always-available default. Richer backends
//! (text-understanding services) live outside the core and hand their answer
//! in through [`StaticClassifier`].

use crate::error::{ErrorSeverity, GameError};
use crate::state::SkillName;
use crate::state::skill_names as names;

/// Errors a classifier backend may report.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClassifierError {
    #[error("skill classifier unavailable: {0}")]
    Unavailable(String),

    #[error("skill classifier rejected input: {0}")]
    Rejected(String),
}

impl GameError for ClassifierError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "CLASSIFIER_UNAVAILABLE",
            Self::Rejected(_) => "CLASSIFIER_REJECTED",
        }
    }
}

/// Capability: action text → most relevant attacker skill.
pub trait SkillClassifier: Send + Sync {
    fn classify(&self, action_text: &str) -> Result<SkillName, ClassifierError>;

    /// Skill used when classification is unavailable or fails.
    fn fallback_skill(&self) -> SkillName {
        SkillName::melee()
    }
}

/// Classifies with `classifier`, substituting its fallback skill on error.
///
/// Never blocks resolution on classification.
pub fn classify_or_fallback(classifier: &dyn SkillClassifier, action_text: &str) -> SkillName {
    classifier
        .classify(action_text)
        .unwrap_or_else(|_| classifier.fallback_skill())
}

type KeywordRule = (&'static [&'static str], &'static str);

const DEFAULT_RULES: &[KeywordRule] = &[
    (&["sword", "blade", "sabre", "saber", "longsword", "slash"], names::SWORD_FIGHTING),
    (&["axe", "hatchet", "cleave", "chop"], names::AXE_FIGHTING),
    (&["dagger", "knife", "stab", "shiv"], names::DAGGER_FIGHTING),
    (&["club", "mace", "hammer", "staff", "cudgel", "bash"], names::BLUNT_WEAPONS),
    (&["bow", "arrow", "shoot", "crossbow"], names::ARCHERY),
    (&["punch", "kick", "fist", "fists", "headbutt", "unarmed"], names::UNARMED),
];

/// Deterministic keyword table classifier.
///
/// The first rule whose keyword appears as a word in the text wins; text that
/// matches nothing classifies as [`names::MELEE`].
#[derive(Clone, Debug)]
pub struct KeywordClassifier {
    rules: &'static [KeywordRule],
}

impl KeywordClassifier {
    pub const fn new() -> Self {
        Self {
            rules: DEFAULT_RULES,
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillClassifier for KeywordClassifier {
    fn classify(&self, action_text: &str) -> Result<SkillName, ClassifierError> {
        let lowered = action_text.to_ascii_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|word| !word.is_empty())
            .collect();

        let skill = self
            .rules
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|keyword| words.contains(keyword)))
            .map(|(_, skill)| *skill)
            .unwrap_or(names::MELEE);

        Ok(SkillName::new(skill))
    }
}

/// Classifier that always answers with a pre-resolved skill.
///
/// Used when an asynchronous backend has already classified the action.
#[derive(Clone, Debug)]
pub struct StaticClassifier(pub SkillName);

impl SkillClassifier for StaticClassifier {
    fn classify(&self, _action_text: &str) -> Result<SkillName, ClassifierError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offline;

    impl SkillClassifier for Offline {
        fn classify(&self, _action_text: &str) -> Result<SkillName, ClassifierError> {
            Err(ClassifierError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn sword_text_maps_to_sword_fighting() {
        let classifier = KeywordClassifier::new();
        let skill = classifier.classify("attack goblin with sword").unwrap();
        assert_eq!(skill.as_str(), names::SWORD_FIGHTING);
    }

    #[test]
    fn keywords_match_whole_words_only() {
        let classifier = KeywordClassifier::new();
        // "bowl" must not count as "bow"
        let skill = classifier.classify("throw the bowl at the rat").unwrap();
        assert_eq!(skill.as_str(), names::MELEE);
    }

    #[test]
    fn unmatched_text_is_generic_melee() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("attack").unwrap(), SkillName::melee());
    }

    #[test]
    fn failing_backend_falls_back() {
        assert_eq!(classify_or_fallback(&Offline, "stab"), SkillName::melee());
    }
}
