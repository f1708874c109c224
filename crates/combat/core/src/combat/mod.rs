//! Skill-based attack resolution.
//!
//! Leaf-first: [`check`] rolls against a DC, [`damage`] scales weapon damage,
//! [`classifier`] picks the attacker skill and [`resolver`] ties them together.
pub mod check;
pub mod classifier;
pub mod damage;
pub mod resolver;
pub mod result;

pub use check::{CheckOutcome, skill_check};
pub use classifier::{
    ClassifierError, KeywordClassifier, SkillClassifier, StaticClassifier, classify_or_fallback,
};
pub use damage::{calculate_damage, fallback_damage};
pub use resolver::{Resolution, resolve, resolve_attack};
pub use result::{AttackResult, FailureReason};
