/// Hit points and life status of an actor.
///
/// Mutated only through [`CombatState::apply_damage`], [`CombatState::heal`]
/// and the death transition performed inside `apply_damage`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    current_hp: u32,
    max_hp: u32,
    is_dead: bool,
}

/// Result of applying damage to a [`CombatState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageOutcome {
    pub previous_hp: u32,
    pub current_hp: u32,
    /// True only on the transition into death, not for already-dead actors.
    pub died: bool,
}

impl DamageOutcome {
    pub fn dealt(&self) -> u32 {
        self.previous_hp - self.current_hp
    }
}

impl CombatState {
    /// Spawns a combat state at full health.
    pub fn new(max_hp: u32) -> Self {
        Self {
            current_hp: max_hp,
            max_hp,
            is_dead: max_hp == 0,
        }
    }

    /// Spawns a combat state with explicit current hp (clamped to `max_hp`).
    pub fn with_current(current_hp: u32, max_hp: u32) -> Self {
        let current_hp = current_hp.min(max_hp);
        Self {
            current_hp,
            max_hp,
            is_dead: current_hp == 0,
        }
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    /// Current hp as a percentage of max hp (0..=100).
    pub fn hp_percent(&self) -> u32 {
        if self.max_hp == 0 {
            return 0;
        }
        ((self.current_hp as u64 * 100) / self.max_hp as u64) as u32
    }

    /// `hp' = max(0, hp - damage)`; reaching zero is the death transition.
    pub fn apply_damage(&mut self, damage: u32) -> DamageOutcome {
        let previous_hp = self.current_hp;
        self.current_hp = self.current_hp.saturating_sub(damage);

        let died = !self.is_dead && self.current_hp == 0;
        if died {
            self.is_dead = true;
        }

        DamageOutcome {
            previous_hp,
            current_hp: self.current_hp,
            died,
        }
    }

    /// Restores hp up to `max_hp`. Dead actors cannot be healed.
    ///
    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if self.is_dead {
            return 0;
        }
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp);
        self.current_hp - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn damage_saturates_at_zero_and_kills() {
        let mut state = CombatState::new(10);
        let outcome = state.apply_damage(25);

        assert_eq!(outcome.current_hp, 0);
        assert_eq!(outcome.dealt(), 10);
        assert!(outcome.died);
        assert!(state.is_dead());
    }

    #[test]
    fn death_transition_fires_once() {
        let mut state = CombatState::new(3);
        assert!(state.apply_damage(3).died);
        assert!(!state.apply_damage(3).died);
    }

    #[test]
    fn zero_damage_leaves_hp_untouched() {
        let mut state = CombatState::with_current(7, 10);
        let outcome = state.apply_damage(0);
        assert_eq!(outcome.current_hp, 7);
        assert!(!outcome.died);
    }

    #[test]
    fn heal_caps_at_max_and_ignores_dead() {
        let mut state = CombatState::with_current(4, 10);
        assert_eq!(state.heal(20), 6);
        assert_eq!(state.current_hp(), 10);

        state.apply_damage(10);
        assert_eq!(state.heal(5), 0);
    }

    #[test]
    fn hp_percent_rounds_down() {
        let state = CombatState::with_current(3, 20);
        assert_eq!(state.hp_percent(), 15);
    }

    proptest! {
        #[test]
        fn damage_never_underflows(hp in 1u32..500, max_extra in 0u32..500, damage in 0u32..2000) {
            let mut state = CombatState::with_current(hp, hp + max_extra);
            let outcome = state.apply_damage(damage);

            prop_assert_eq!(outcome.current_hp, hp.saturating_sub(damage));
            prop_assert_eq!(outcome.died, damage >= hp);
            prop_assert_eq!(state.is_dead(), outcome.current_hp == 0);
        }
    }
}
