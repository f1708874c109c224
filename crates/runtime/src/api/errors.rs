//! Unified error types surfaced by the runtime API.
//!
//! Wraps engine rejections and content loading failures so clients can bubble
//! them up with consistent context. Degraded services never show up here:
//! narration and classification fall back instead of failing the turn.
use combat_core::{EngineError, ErrorSeverity, GameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The core refused the player's command; state is unchanged.
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("runtime requires an initial game state before building")]
    MissingState,

    #[error("failed to load combat content")]
    Content(#[source] anyhow::Error),
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Engine(error) => error.severity(),
            Self::MissingState | Self::Content(_) => ErrorSeverity::Fatal,
        }
    }
}

/// Errors a narrator backend may report. Always recovered with a template.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NarratorError {
    #[error("narrator unavailable: {0}")]
    Unavailable(String),

    #[error("narrator timed out after {0} ms")]
    TimedOut(u128),
}
