//! Fixtures shared by unit tests.

use std::collections::BTreeMap;

use crate::env::{
    ArmorData, ConsumableData, DamageType, ItemDefinition, ItemKind, ItemOracle, RngOracle,
    WeaponData,
};
use crate::state::{
    ActorState, EntityId, ItemId, Location, LocationId, SkillName, SkillState, WorldState,
    skill_names as names,
};

pub const SWORD: ItemId = ItemId(1);
pub const LEATHER: ItemId = ItemId(2);
pub const POTION: ItemId = ItemId(3);

pub const HALL: LocationId = LocationId(1);
pub const CELLAR: LocationId = LocationId(2);
pub const GOBLIN: EntityId = EntityId(1);

/// In-memory item catalog.
#[derive(Default)]
pub struct TestItems {
    items: BTreeMap<ItemId, ItemDefinition>,
}

impl TestItems {
    pub fn standard() -> Self {
        let mut items = BTreeMap::new();
        items.insert(
            SWORD,
            ItemDefinition::new(
                SWORD,
                "sword",
                ItemKind::Weapon(WeaponData {
                    damage: 6,
                    damage_type: DamageType::Slashing,
                    skill: Some(SkillName::new(names::SWORD_FIGHTING)),
                }),
            ),
        );
        items.insert(
            LEATHER,
            ItemDefinition::new(
                LEATHER,
                "leather armor",
                ItemKind::Armor(ArmorData { defense_bonus: 1 }),
            ),
        );
        items.insert(
            POTION,
            ItemDefinition::new(
                POTION,
                "healing potion",
                ItemKind::Consumable(ConsumableData { heal: 8 }),
            ),
        );
        Self { items }
    }
}

impl ItemOracle for TestItems {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition> {
        self.items.get(&id).cloned()
    }
}

/// Rng that always rolls the same die face and the midpoint of any range.
pub struct FixedRng {
    face: u32,
}

impl FixedRng {
    pub fn new(face: u32) -> Self {
        Self { face }
    }
}

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.face.saturating_sub(1)
    }

    fn roll_die(&self, _seed: u64, sides: u32) -> u32 {
        self.face.clamp(1, sides.max(1))
    }

    fn range(&self, _seed: u64, min: u32, max: u32) -> u32 {
        min + max.saturating_sub(min) / 2
    }
}

/// Player with a sword (Sword Fighting 5) facing a passive goblin (Dodge 2)
/// in a hall with one exit to the cellar.
pub fn duel_world() -> WorldState {
    let mut world = WorldState::new();
    world.add_location(Location::new(HALL, "hall").with_exit(CELLAR));
    world.add_location(Location::new(CELLAR, "cellar").with_exit(HALL));
    world.spawn(
        ActorState::player("hero", HALL, 30)
            .with_skills(SkillState::new().with(names::SWORD_FIGHTING, 5))
            .with_weapon(SWORD),
    );
    world.spawn(
        ActorState::npc(GOBLIN, "goblin", HALL, 12)
            .with_skills(SkillState::new().with(names::DODGE, 2).with(names::MELEE, 2)),
    );
    world
}
