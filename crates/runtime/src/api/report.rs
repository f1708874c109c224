//! What one player turn produced.
use combat_core::{EntityId, LogEntry, StrikeReport, SweepReport, Tick};
use serde::Serialize;

/// Display text for one attack. Never affects state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NarrationLine {
    pub attacker: EntityId,
    pub defender: EntityId,
    pub text: String,
    /// The narrator failed or timed out and a template was used instead.
    pub degraded: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Clock after the player's action and the NPC sweep.
    pub clock: Tick,
    /// The player's own attack; `None` for a wait.
    pub player: Option<StrikeReport>,
    pub sweep: SweepReport,
    /// Player attack first, then NPC attacks in sweep order.
    pub narration: Vec<NarrationLine>,
    /// Log entries appended during this turn.
    pub entries: Vec<LogEntry>,
}

impl TurnReport {
    pub fn player_died(&self) -> bool {
        self.sweep.player_died
    }

    /// Total number of attacks resolved this turn.
    pub fn strikes(&self) -> usize {
        usize::from(self.player.is_some()) + self.sweep.strikes().count()
    }

    pub fn degraded_narration(&self) -> usize {
        self.narration.iter().filter(|line| line.degraded).count()
    }
}
