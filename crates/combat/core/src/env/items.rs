use strum::{Display, EnumIter};

use crate::state::{ItemId, SkillName};

/// Read-only item catalog lookup.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition>;

    /// Weapon stats for `id`, if it is a weapon.
    fn weapon(&self, id: ItemId) -> Option<WeaponData> {
        match self.definition(id)?.kind {
            ItemKind::Weapon(data) => Some(data),
            _ => None,
        }
    }

    /// Defense bonus for `id`, if it is armor.
    fn armor_bonus(&self, id: ItemId) -> Option<i32> {
        match self.definition(id)?.kind {
            ItemKind::Armor(data) => Some(data.defense_bonus),
            _ => None,
        }
    }

    /// Healing amount for `id`, if it is a healing consumable.
    fn healing(&self, id: ItemId) -> Option<u32> {
        match self.definition(id)?.kind {
            ItemKind::Consumable(data) if data.heal > 0 => Some(data.heal),
            _ => None,
        }
    }
}

/// Damage families used by weapons and narration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum DamageType {
    #[default]
    Blunt,
    Slashing,
    Piercing,
    Fire,
    Cold,
    Poison,
    Arcane,
}

/// Item definition: id, display name and type-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(id: ItemId, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon(WeaponData),
    Armor(ArmorData),
    Consumable(ConsumableData),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub damage: u32,
    pub damage_type: DamageType,
    /// Skill that governs this weapon, used as a classification hint.
    pub skill: Option<SkillName>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorData {
    pub defense_bonus: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumableData {
    pub heal: u32,
}
