use super::Tick;

/// Timeline bookkeeping for the encounter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Current virtual time. Advances only when the player completes an action.
    pub clock: Tick,

    /// Sequential action identifier, incremented for every resolved action.
    ///
    /// Combined with the game seed to derive a unique seed per roll, so two
    /// actions within the same tick never share randomness.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nonce: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(clock: Tick) -> Self {
        Self { clock, nonce: 0 }
    }

    /// Returns the current nonce and advances it.
    pub fn next_nonce(&mut self) -> u64 {
        let nonce = self.nonce;
        self.nonce = self.nonce.wrapping_add(1);
        nonce
    }

    pub fn advance(&mut self, ticks: u64) {
        self.clock = self.clock + ticks;
    }
}
