//! Encounter loader: locations, actors and a scripted sequence of player turns.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use combat_core::{
    ActorState, AiPreset, CombatState, EntityId, ItemId, Location, LocationId, SkillState,
    Standing, WorldState,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSpec {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub exits: Vec<u32>,
}

/// One actor as written in an encounter file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorSpec {
    /// Ignored for the player, whose id is always 0.
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub location: u32,
    pub max_hp: u32,
    /// Starting hp; defaults to `max_hp`.
    #[serde(default)]
    pub hp: Option<u32>,
    #[serde(default)]
    pub skills: BTreeMap<String, i32>,
    #[serde(default)]
    pub weapon: Option<u16>,
    #[serde(default)]
    pub armor: Option<u16>,
    #[serde(default)]
    pub inventory: Vec<u16>,
    #[serde(default)]
    pub disposition: i32,
    #[serde(default)]
    pub hostile: bool,
    #[serde(default)]
    pub ai: AiPreset,
}

/// A scripted player turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptStep {
    /// Attack the living actor named `target` with free-text `text`.
    Attack { target: String, text: String },
    Wait,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterSpec {
    pub name: String,
    /// Default game seed, overridable by runtime configuration.
    #[serde(default)]
    pub seed: Option<u64>,
    pub locations: Vec<LocationSpec>,
    pub player: ActorSpec,
    #[serde(default)]
    pub npcs: Vec<ActorSpec>,
    #[serde(default)]
    pub script: Vec<ScriptStep>,
}

impl EncounterSpec {
    /// Builds the initial world, validating ids and references.
    pub fn build_world(&self) -> LoadResult<WorldState> {
        let mut world = WorldState::new();

        let location_ids: BTreeSet<u32> = self.locations.iter().map(|l| l.id).collect();
        if location_ids.len() != self.locations.len() {
            anyhow::bail!("encounter '{}' has duplicate location ids", self.name);
        }
        for spec in &self.locations {
            let mut location = Location::new(LocationId(spec.id), spec.name.clone());
            for exit in &spec.exits {
                if !location_ids.contains(exit) {
                    anyhow::bail!(
                        "location {} has an exit to unknown location {}",
                        spec.id,
                        exit
                    );
                }
                location = location.with_exit(LocationId(*exit));
            }
            world.add_location(location);
        }

        world.spawn(self.build_actor(&self.player, EntityId::PLAYER, &location_ids)?);

        for spec in &self.npcs {
            let id = EntityId(spec.id);
            if id.is_player() {
                anyhow::bail!("npc '{}' uses the reserved player id 0", spec.name);
            }
            if world.contains(id) {
                anyhow::bail!("duplicate npc id {}", spec.id);
            }
            world.spawn(self.build_actor(spec, id, &location_ids)?);
        }

        Ok(world)
    }

    fn build_actor(
        &self,
        spec: &ActorSpec,
        id: EntityId,
        locations: &BTreeSet<u32>,
    ) -> LoadResult<ActorState> {
        if !locations.contains(&spec.location) {
            anyhow::bail!(
                "actor '{}' is placed in unknown location {}",
                spec.name,
                spec.location
            );
        }
        if spec.max_hp == 0 {
            anyhow::bail!("actor '{}' must have positive max_hp", spec.name);
        }

        let skills = spec
            .skills
            .iter()
            .fold(SkillState::new(), |skills, (name, level)| {
                skills.with(name.as_str(), *level)
            });
        let combat = CombatState::with_current(spec.hp.unwrap_or(spec.max_hp), spec.max_hp);
        let location = LocationId(spec.location);

        let mut actor = if id.is_player() {
            ActorState::player(spec.name.clone(), location, spec.max_hp)
        } else {
            ActorState::npc(id, spec.name.clone(), location, spec.max_hp)
                .with_disposition(spec.disposition)
                .with_ai(spec.ai)
        }
        .with_skills(skills)
        .with_combat(combat)
        .with_inventory(spec.inventory.iter().copied().map(ItemId));

        if let Some(weapon) = spec.weapon {
            actor = actor.with_weapon(ItemId(weapon));
        }
        if let Some(armor) = spec.armor {
            actor = actor.with_armor(ItemId(armor));
        }
        if spec.hostile && !id.is_player() {
            actor.standing = Standing::Hostile;
        }
        Ok(actor)
    }
}

/// Loader for encounter definitions from RON files.
pub struct EncounterLoader;

impl EncounterLoader {
    pub fn load(path: &Path) -> LoadResult<EncounterSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EncounterSpec> {
        let spec: EncounterSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter RON: {}", e))?;
        // Surface reference errors at load time rather than at world build.
        spec.build_world()?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const ENCOUNTER: &str = r#"(
    name: "Cellar",
    seed: Some(7),
    locations: [
        (id: 1, name: "Stairs", exits: [2]),
        (id: 2, name: "Cellar"),
    ],
    player: (
        name: "Hero",
        location: 1,
        max_hp: 30,
        skills: {"Sword Fighting": 5},
        weapon: Some(1),
    ),
    npcs: [
        (id: 1, name: "Rat", location: 1, max_hp: 4, hostile: true, ai: cautious),
        (id: 2, name: "Goblin", location: 2, max_hp: 12, hp: Some(6), inventory: [3]),
    ],
    script: [
        Attack(target: "rat", text: "stab the rat"),
        Wait,
    ],
)
"#;

    #[test]
    fn builds_world_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ENCOUNTER.as_bytes()).unwrap();

        let spec = EncounterLoader::load(file.path()).unwrap();
        let world = spec.build_world().unwrap();

        assert_eq!(spec.seed, Some(7));
        assert_eq!(spec.script.len(), 2);

        let player = world.player().unwrap();
        assert_eq!(player.skills.level("Sword Fighting"), 5);
        assert_eq!(player.equipment.weapon, Some(ItemId(1)));

        let rat = world.actor(EntityId(1)).unwrap();
        assert!(rat.is_hostile());
        assert_eq!(rat.ai, AiPreset::Cautious);

        let goblin = world.actor(EntityId(2)).unwrap();
        assert_eq!(goblin.combat.current_hp(), 6);
        assert_eq!(goblin.inventory, vec![ItemId(3)]);
    }

    #[test]
    fn unknown_location_is_rejected() {
        let broken = ENCOUNTER.replace("location: 2, max_hp: 12", "location: 9, max_hp: 12");
        let err = EncounterLoader::parse(&broken).unwrap_err();
        assert!(err.to_string().contains("unknown location 9"));
    }

    #[test]
    fn reserved_player_id_is_rejected() {
        let broken = ENCOUNTER.replace("(id: 1, name: \"Rat\"", "(id: 0, name: \"Rat\"");
        let err = EncounterLoader::parse(&broken).unwrap_err();
        assert!(err.to_string().contains("reserved player id"));
    }
}
