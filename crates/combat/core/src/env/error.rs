//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemId;

/// Errors that occur when a capability required for resolution is missing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// ItemOracle is not available in the environment.
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,

    /// An equipped or carried item has no catalog entry.
    #[error("item {0} not found in catalog")]
    ItemNotFound(ItemId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ItemsNotAvailable | Self::RngNotAvailable => ErrorSeverity::Recoverable,
            Self::ItemNotFound(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            Self::RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            Self::ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
        }
    }
}
