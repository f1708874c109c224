#![allow(dead_code)]

use std::path::PathBuf;

use combat_content::{EncounterLoader, EncounterSpec, ItemLoader, ScriptStep};
use combat_core::{
    ActorState, DamageType, EntityId, ItemDefinition, ItemId, ItemKind, Location, LocationId,
    RngOracle, SkillState, WeaponData, WorldState,
};
use runtime::{CombatRuntime, ItemOracleImpl, TurnReport};

pub const HALL: LocationId = LocationId(1);
pub const GOBLIN: EntityId = EntityId(1);
pub const SWORD: ItemId = ItemId(1);

/// Rng that always rolls the same face.
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0.saturating_sub(1)
    }

    fn roll_die(&self, _seed: u64, sides: u32) -> u32 {
        self.0.clamp(1, sides.max(1))
    }

    fn range(&self, _seed: u64, min: u32, max: u32) -> u32 {
        min + max.saturating_sub(min) / 2
    }
}

pub fn sword_items() -> ItemOracleImpl {
    ItemOracleImpl::from_definitions([ItemDefinition::new(
        SWORD,
        "Longsword",
        ItemKind::Weapon(WeaponData {
            damage: 6,
            damage_type: DamageType::Slashing,
            skill: Some("Sword Fighting".into()),
        }),
    )])
}

/// A hero with a sword and a passive goblin sharing one hall.
pub fn duel_world(goblin_hp: u32) -> WorldState {
    let mut world = WorldState::new();
    world.add_location(Location::new(HALL, "Hall").with_exit(LocationId(2)));
    world.add_location(Location::new(LocationId(2), "Cellar").with_exit(HALL));
    world.spawn(
        ActorState::player("Hero", HALL, 30)
            .with_skills(SkillState::new().with("Sword Fighting", 5))
            .with_weapon(SWORD),
    );
    world.spawn(
        ActorState::npc(GOBLIN, "Goblin", HALL, goblin_hp)
            .with_skills(SkillState::new().with("Dodge", 2).with("Melee", 1)),
    );
    world
}

pub fn content_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../combat/content/data")
        .join(file)
}

pub fn shipped_encounter() -> EncounterSpec {
    EncounterLoader::load(&content_path("encounter.ron")).expect("shipped encounter loads")
}

pub fn shipped_items() -> ItemOracleImpl {
    let items = ItemLoader::load(&content_path("items.ron")).expect("shipped items load");
    ItemOracleImpl::from_definitions(items)
}

/// Plays `script` until it ends or the player dies.
pub async fn play(runtime: &mut CombatRuntime, script: &[ScriptStep]) -> Vec<TurnReport> {
    let mut reports = Vec::new();
    for step in script {
        if runtime.player_defeated() {
            break;
        }
        let report = match step {
            ScriptStep::Attack { target, text } => {
                let world = &runtime.state().world;
                let found = world
                    .find_by_name(target)
                    .map(|actor| actor.id)
                    .filter(|&id| world.is_with_player(id));
                let Some(id) = found else {
                    continue;
                };
                runtime.player_attack(id, text).await
            }
            ScriptStep::Wait => runtime.player_wait().await,
        };
        reports.push(report.expect("scripted turn should resolve"));
    }
    reports
}
