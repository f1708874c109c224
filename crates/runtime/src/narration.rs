//! Timeout-bounded calls into the optional text services.
//!
//! Neither call can fail from the caller's point of view: errors and
//! timeouts degrade to the deterministic defaults and are only logged.
use std::time::Duration;

use combat_core::{KeywordClassifier, SkillName, classify_or_fallback};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::api::{
    ClassifierService, NarrationLine, NarrationRequest, Narrator, NarratorError, TemplateNarrator,
};

/// Classifies `action_text`, falling back to the keyword table.
pub(crate) async fn classify_bounded(
    service: &dyn ClassifierService,
    action_text: &str,
    limit: Duration,
) -> SkillName {
    match timeout(limit, service.classify(action_text)).await {
        Ok(Ok(skill)) => {
            debug!(%skill, action_text, "classified action");
            skill
        }
        Ok(Err(error)) => {
            warn!(%error, action_text, "skill classification failed; using keyword fallback");
            keyword_fallback(action_text)
        }
        Err(_) => {
            warn!(
                timeout_ms = limit.as_millis(),
                action_text, "skill classification timed out; using keyword fallback"
            );
            keyword_fallback(action_text)
        }
    }
}

fn keyword_fallback(action_text: &str) -> SkillName {
    let classifier = KeywordClassifier::new();
    classify_or_fallback(&classifier, action_text)
}

/// Narrates one attack, substituting the template on error or timeout.
pub(crate) async fn narrate_bounded(
    narrator: &dyn Narrator,
    request: &NarrationRequest,
    limit: Duration,
) -> NarrationLine {
    let outcome = match timeout(limit, narrator.narrate(request)).await {
        Ok(result) => result,
        Err(_) => Err(NarratorError::TimedOut(limit.as_millis())),
    };

    let (text, degraded) = match outcome {
        Ok(text) => (text, false),
        Err(error) => {
            warn!(
                %error,
                attacker = %request.attacker,
                defender = %request.defender,
                "narration degraded to template"
            );
            (TemplateNarrator::render(request), true)
        }
    };

    NarrationLine {
        attacker: request.attacker,
        defender: request.defender,
        text,
        degraded,
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use combat_core::{AttackResult, ClassifierError, EntityId};

    use super::*;

    struct Offline;

    #[async_trait]
    impl ClassifierService for Offline {
        async fn classify(&self, _action_text: &str) -> Result<SkillName, ClassifierError> {
            Err(ClassifierError::Unavailable("offline".into()))
        }
    }

    struct Broken;

    #[async_trait]
    impl Narrator for Broken {
        async fn narrate(&self, _request: &NarrationRequest) -> Result<String, NarratorError> {
            Err(NarratorError::Unavailable("no model".into()))
        }
    }

    #[tokio::test]
    async fn failing_classifier_uses_keywords() {
        let skill = classify_bounded(&Offline, "stab with dagger", Duration::from_millis(50)).await;
        assert_eq!(skill.as_str(), "Dagger Fighting");
    }

    #[tokio::test]
    async fn failing_narrator_uses_template() {
        let request = NarrationRequest {
            attacker: EntityId(1),
            attacker_name: "Goblin".into(),
            defender: EntityId::PLAYER,
            defender_name: "Wanderer".into(),
            skill: SkillName::melee(),
            result: AttackResult::Miss { was_dodged: false },
            fallback_damage: None,
            defender_died: false,
        };

        let line = narrate_bounded(&Broken, &request, Duration::from_millis(50)).await;

        assert!(line.degraded);
        assert_eq!(line.text, "Goblin misses Wanderer.");
    }
}
