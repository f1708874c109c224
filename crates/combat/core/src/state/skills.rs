//! Per-actor skill levels.
//!
//! Skill levels are owned by the progression system; combat only reads them.
//! The modifier contributed to a d20 check is the level itself, so a level-5
//! swordsman rolls `d20 + 5`.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Well-known skill names used by the classifier and the resolver.
pub mod names {
    /// Generic fallback when no specific skill applies.
    pub const MELEE: &str = "Melee";
    pub const DODGE: &str = "Dodge";
    pub const SPEED: &str = "Speed";
    pub const UNARMED: &str = "Unarmed";
    pub const SWORD_FIGHTING: &str = "Sword Fighting";
    pub const AXE_FIGHTING: &str = "Axe Fighting";
    pub const DAGGER_FIGHTING: &str = "Dagger Fighting";
    pub const BLUNT_WEAPONS: &str = "Blunt Weapons";
    pub const ARCHERY: &str = "Archery";
}

/// Name of a combat or defense skill.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillName(String);

impl SkillName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The skill used whenever classification is unavailable.
    pub fn melee() -> Self {
        Self::new(names::MELEE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Borrow<str> for SkillName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Skill levels keyed by name. Missing skills count as level 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillState {
    levels: BTreeMap<SkillName, i32>,
}

impl SkillState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter used by spawners and tests.
    #[must_use]
    pub fn with(mut self, skill: impl Into<SkillName>, level: i32) -> Self {
        self.set(skill, level);
        self
    }

    pub fn set(&mut self, skill: impl Into<SkillName>, level: i32) {
        self.levels.insert(skill.into(), level);
    }

    pub fn level(&self, skill: &str) -> i32 {
        self.levels.get(skill).copied().unwrap_or(0)
    }

    /// Check modifier contributed by `skill`.
    pub fn modifier(&self, skill: &str) -> i32 {
        self.level(skill)
    }

    /// Speed level, never negative. Drives action cost.
    pub fn speed_level(&self) -> u32 {
        self.level(names::SPEED).max(0) as u32
    }

    /// Evasion modifier the defender contributes to the attacker's DC.
    pub fn evasion_modifier(&self) -> i32 {
        self.level(names::DODGE).max(self.level(names::SPEED))
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.levels.contains_key(skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SkillName, i32)> {
        self.levels.iter().map(|(name, level)| (name, *level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_skill_is_level_zero() {
        let skills = SkillState::new().with(names::SWORD_FIGHTING, 4);
        assert_eq!(skills.level(names::SWORD_FIGHTING), 4);
        assert_eq!(skills.level(names::ARCHERY), 0);
    }

    #[test]
    fn evasion_uses_the_better_of_dodge_and_speed() {
        let skills = SkillState::new().with(names::DODGE, 2).with(names::SPEED, 3);
        assert_eq!(skills.evasion_modifier(), 3);
    }

    #[test]
    fn negative_speed_clamps_to_zero() {
        let skills = SkillState::new().with(names::SPEED, -4);
        assert_eq!(skills.speed_level(), 0);
    }
}
