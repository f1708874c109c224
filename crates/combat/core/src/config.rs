//! Designer-tunable combat constants.
//!
//! Every numeric constant used by scheduling, resolution and the AI policy
//! lives here. Defaults are illustrative starting values, not balance
//! contracts; content files override them field by field.

use crate::schedule::ActionKind;

/// Root configuration consumed by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    pub costs: CostTable,
    pub check: CheckRules,
    pub damage: DamageRules,
    pub ai: AiRules,
    pub disposition: DispositionRules,
}

impl CombatConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Base tick cost per action kind and the speed reduction applied to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostTable {
    pub melee_attack: u64,
    pub defend: u64,
    pub use_item: u64,
    pub flee: u64,
    pub wait: u64,
    /// Speed levels required to shave one tick off the base cost.
    pub speed_levels_per_tick: u32,
    /// Documented floor. The effective floor is never below one tick.
    pub min_cost: u64,
}

impl CostTable {
    pub const DEFAULT_MIN_COST: u64 = 2;

    pub fn base(&self, kind: ActionKind) -> u64 {
        match kind {
            ActionKind::MeleeAttack => self.melee_attack,
            ActionKind::Defend => self.defend,
            ActionKind::UseItem => self.use_item,
            ActionKind::Flee => self.flee,
            ActionKind::Wait => self.wait,
        }
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            melee_attack: 5,
            defend: 3,
            use_item: 4,
            flee: 6,
            wait: 3,
            speed_levels_per_tick: 1,
            min_cost: Self::DEFAULT_MIN_COST,
        }
    }
}

/// Parameters of the d20 skill check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CheckRules {
    /// DC before the defender's evasion and armor are added.
    pub base_dc: i32,
    /// DC bonus granted while the defender is defending.
    pub defend_bonus: i32,
    /// Natural roll that always hits and counts as critical.
    pub critical_roll: u32,
    /// Natural roll that always misses.
    pub fumble_roll: u32,
}

impl Default for CheckRules {
    fn default() -> Self {
        Self {
            base_dc: 10,
            defend_bonus: 4,
            critical_roll: 20,
            fumble_roll: 1,
        }
    }
}

/// Damage formula parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageRules {
    /// Base damage when no weapon is equipped.
    pub unarmed: u32,
    /// Extra damage per attacker skill level, in percent of base.
    pub scaling_percent_per_level: u32,
    /// Maximum random deviation, applied as `±variance`.
    pub variance: u32,
    pub critical_multiplier: u32,
    /// Deterministic damage the engine applies after a resolution failure.
    pub fallback: u32,
}

impl Default for DamageRules {
    fn default() -> Self {
        Self {
            unarmed: 2,
            scaling_percent_per_level: 10,
            variance: 1,
            critical_multiplier: 2,
            fallback: 1,
        }
    }
}

/// Thresholds of the NPC decision policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiRules {
    /// Flee when hp% is strictly below this value.
    pub flee_threshold_percent: u32,
    /// Consider healing when hp% is strictly below this value.
    pub low_hp_percent: u32,
}

impl Default for AiRules {
    fn default() -> Self {
        Self {
            flee_threshold_percent: 20,
            low_hp_percent: 50,
        }
    }
}

/// Disposition thresholds driving hostility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispositionRules {
    /// Disposition at or below which an NPC turns hostile.
    pub hostility_threshold: i32,
    /// Disposition shift applied when the player attacks an NPC.
    pub attack_penalty: i32,
}

impl Default for DispositionRules {
    fn default() -> Self {
        Self {
            hostility_threshold: -50,
            attack_penalty: -100,
        }
    }
}
