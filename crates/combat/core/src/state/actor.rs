use crate::ai::AiPreset;

use super::{CombatState, EntityId, ItemId, LocationId, SkillState};

/// Whether an actor is the player or an NPC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    Player,
    Npc,
}

/// Hostility flag of an NPC toward the player.
///
/// Together with turn-queue membership this is the whole of "being in combat":
/// a hostile NPC is either queued or dead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Standing {
    #[default]
    Passive,
    Hostile,
}

/// Affinity score toward the player, always within `-100..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disposition(i8);

impl Disposition {
    pub const MIN: i8 = -100;
    pub const MAX: i8 = 100;

    pub fn new(score: i32) -> Self {
        Self(score.clamp(Self::MIN as i32, Self::MAX as i32) as i8)
    }

    pub fn score(self) -> i32 {
        self.0 as i32
    }

    /// Shifts the score by `delta`, saturating at the bounds.
    #[must_use]
    pub fn adjusted(self, delta: i32) -> Self {
        Self::new(self.score().saturating_add(delta))
    }
}

/// Equipped gear relevant to combat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapon: Option<ItemId>,
    pub armor: Option<ItemId>,
}

/// Complete per-actor state read and mutated by the combat core.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub kind: ActorKind,
    pub location: LocationId,
    pub combat: CombatState,
    pub skills: SkillState,
    pub disposition: Disposition,
    pub standing: Standing,
    pub equipment: Equipment,
    pub inventory: Vec<ItemId>,
    /// Set by a Defend action, cleared when the actor next takes a turn.
    #[cfg_attr(feature = "serde", serde(default))]
    pub defending: bool,
    /// Decision tree followed on this actor's turns. Ignored for the player.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ai: AiPreset,
}

impl ActorState {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        kind: ActorKind,
        location: LocationId,
        combat: CombatState,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            location,
            combat,
            skills: SkillState::default(),
            disposition: Disposition::default(),
            standing: Standing::Passive,
            equipment: Equipment::default(),
            inventory: Vec::new(),
            defending: false,
            ai: AiPreset::default(),
        }
    }

    pub fn player(name: impl Into<String>, location: LocationId, max_hp: u32) -> Self {
        Self::new(
            EntityId::PLAYER,
            name,
            ActorKind::Player,
            location,
            CombatState::new(max_hp),
        )
    }

    pub fn npc(id: EntityId, name: impl Into<String>, location: LocationId, max_hp: u32) -> Self {
        Self::new(id, name, ActorKind::Npc, location, CombatState::new(max_hp))
    }

    #[must_use]
    pub fn with_skills(mut self, skills: SkillState) -> Self {
        self.skills = skills;
        self
    }

    #[must_use]
    pub fn with_weapon(mut self, weapon: ItemId) -> Self {
        self.equipment.weapon = Some(weapon);
        self
    }

    #[must_use]
    pub fn with_armor(mut self, armor: ItemId) -> Self {
        self.equipment.armor = Some(armor);
        self
    }

    #[must_use]
    pub fn with_inventory(mut self, items: impl IntoIterator<Item = ItemId>) -> Self {
        self.inventory.extend(items);
        self
    }

    #[must_use]
    pub fn with_disposition(mut self, score: i32) -> Self {
        self.disposition = Disposition::new(score);
        self
    }

    #[must_use]
    pub fn with_combat(mut self, combat: CombatState) -> Self {
        self.combat = combat;
        self
    }

    #[must_use]
    pub fn with_ai(mut self, ai: AiPreset) -> Self {
        self.ai = ai;
        self
    }

    #[must_use]
    pub fn hostile(mut self) -> Self {
        self.standing = Standing::Hostile;
        self
    }

    pub fn is_npc(&self) -> bool {
        self.kind == ActorKind::Npc
    }

    pub fn is_hostile(&self) -> bool {
        self.standing == Standing::Hostile
    }

    pub fn is_dead(&self) -> bool {
        self.combat.is_dead()
    }
}
