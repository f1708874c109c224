//! Event payloads for each topic.

use combat_core::{EntityId, Tick};
use serde::Serialize;

/// Summary published once per completed player turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnEvent {
    /// Clock after the sweep.
    pub clock: Tick,
    /// Queue contents in turn order.
    pub queued: Vec<(EntityId, Tick)>,
    pub player_died: bool,
}
