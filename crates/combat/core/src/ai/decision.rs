use std::fmt;

use crate::schedule::ActionKind;
use crate::state::{EntityId, ItemId, LocationId};

/// Action category chosen by the decision policy for one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AiDecision {
    Attack { target: EntityId },
    Defend,
    UseItem { item: ItemId },
    Flee { to: LocationId },
    Wait,
    /// The policy could not decide. Callers treat this exactly like `Wait`.
    Error { reason: String },
}

impl AiDecision {
    pub fn error(reason: impl Into<String>) -> Self {
        Self::Error {
            reason: reason.into(),
        }
    }

    /// Cost-table key used to reschedule the actor after this decision.
    pub fn action_kind(&self) -> ActionKind {
        match self {
            Self::Attack { .. } => ActionKind::MeleeAttack,
            Self::Defend => ActionKind::Defend,
            Self::UseItem { .. } => ActionKind::UseItem,
            Self::Flee { .. } => ActionKind::Flee,
            Self::Wait | Self::Error { .. } => ActionKind::Wait,
        }
    }
}

impl fmt::Display for AiDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack { target } => write!(f, "attack {target}"),
            Self::Defend => f.write_str("defend"),
            Self::UseItem { item } => write!(f, "use {item}"),
            Self::Flee { to } => write!(f, "flee to {to}"),
            Self::Wait => f.write_str("wait"),
            Self::Error { reason } => write!(f, "error: {reason}"),
        }
    }
}
