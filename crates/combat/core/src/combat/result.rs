use std::fmt;

use crate::env::{DamageType, OracleError};

use super::classifier::ClassifierError;

/// Structured outcome of one attack.
///
/// Only `Hit` carries damage, and that damage is always at least 1.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AttackResult {
    Hit {
        damage: u32,
        damage_type: DamageType,
        critical: bool,
    },
    Miss {
        /// The defender's evasion turned what would have been a hit into a miss.
        was_dodged: bool,
    },
    /// Resolution could not run; the caller should fall back to a simple
    /// deterministic damage computation.
    Failure { reason: FailureReason },
}

impl AttackResult {
    /// Damage this result applies. Zero for `Miss` and `Failure`.
    pub fn damage(&self) -> u32 {
        match self {
            Self::Hit { damage, .. } => *damage,
            Self::Miss { .. } | Self::Failure { .. } => 0,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// Why an attack could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FailureReason {
    /// Skill classification backend failed.
    Classifier(String),
    /// A required oracle (rng, items) is missing.
    Oracle(String),
    /// Attacker or defender is not present in the world.
    MissingCombatant(u32),
    /// Attacker or defender has already died.
    CombatantDead(u32),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classifier(msg) => write!(f, "classifier: {msg}"),
            Self::Oracle(msg) => write!(f, "oracle: {msg}"),
            Self::MissingCombatant(id) => write!(f, "combatant #{id} not found"),
            Self::CombatantDead(id) => write!(f, "combatant #{id} is dead"),
        }
    }
}

impl From<ClassifierError> for FailureReason {
    fn from(error: ClassifierError) -> Self {
        Self::Classifier(error.to_string())
    }
}

impl From<OracleError> for FailureReason {
    fn from(error: OracleError) -> Self {
        Self::Oracle(error.to_string())
    }
}
