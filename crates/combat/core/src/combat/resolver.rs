//! Attack resolution: classification, skill check, damage.
//!
//! Resolution is a pure function of the world snapshot, the environment and
//! the action nonce. It never mutates state and never fails with an error;
//! every problem is reported as [`AttackResult::Failure`].

use crate::env::{CombatEnv, DamageType, OracleError, WeaponData, compute_seed, roll_context};
use crate::state::{ActorState, EntityId, SkillName, WorldState};

use super::check::{CheckOutcome, skill_check};
use super::damage::calculate_damage;
use super::result::{AttackResult, FailureReason};

/// Full outcome of a resolution, including the skill the attack used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Classified attacker skill. Falls back to the classifier's default skill
    /// when resolution failed before classification finished.
    pub skill: SkillName,
    /// The check, when one was rolled.
    pub check: Option<CheckOutcome>,
    pub result: AttackResult,
}

/// Resolves `attacker` striking `defender` with the described action.
pub fn resolve_attack(
    attacker: EntityId,
    defender: EntityId,
    action_text: &str,
    world: &WorldState,
    env: &CombatEnv<'_>,
    nonce: u64,
) -> AttackResult {
    resolve(attacker, defender, action_text, world, env, nonce).result
}

/// Like [`resolve_attack`] but keeps the classified skill and the check.
pub fn resolve(
    attacker: EntityId,
    defender: EntityId,
    action_text: &str,
    world: &WorldState,
    env: &CombatEnv<'_>,
    nonce: u64,
) -> Resolution {
    match try_resolve(attacker, defender, action_text, world, env, nonce) {
        Ok(resolution) => resolution,
        Err(reason) => Resolution {
            skill: env.classifier().fallback_skill(),
            check: None,
            result: AttackResult::Failure { reason },
        },
    }
}

fn combatant(world: &WorldState, id: EntityId) -> Result<&ActorState, FailureReason> {
    let actor = world
        .actor(id)
        .ok_or(FailureReason::MissingCombatant(id.0))?;
    if actor.is_dead() {
        return Err(FailureReason::CombatantDead(id.0));
    }
    Ok(actor)
}

fn try_resolve(
    attacker_id: EntityId,
    defender_id: EntityId,
    action_text: &str,
    world: &WorldState,
    env: &CombatEnv<'_>,
    nonce: u64,
) -> Result<Resolution, FailureReason> {
    let attacker = combatant(world, attacker_id)?;
    let defender = combatant(world, defender_id)?;

    let rng = env.rng()?;
    let items = env.items()?;
    let config = env.config();

    let weapon: Option<WeaponData> = attacker
        .equipment
        .weapon
        .map(|id| items.weapon(id).ok_or(OracleError::ItemNotFound(id)))
        .transpose()?;

    // 1. Attacker skill; a generic answer defers to the weapon's own skill.
    let classified = env.classifier().classify(action_text)?;
    let skill = match weapon.as_ref().and_then(|w| w.skill.clone()) {
        Some(weapon_skill) if classified == SkillName::melee() => weapon_skill,
        _ => classified,
    };
    let level = attacker.skills.level(skill.as_str());
    let modifier = attacker.skills.modifier(skill.as_str());

    // 2. DC from defender evasion, armor and stance.
    let evasion = defender.skills.evasion_modifier();
    let armor = defender
        .equipment
        .armor
        .map(|id| items.armor_bonus(id).ok_or(OracleError::ItemNotFound(id)))
        .transpose()?
        .unwrap_or(0);
    let stance = if defender.defending {
        config.check.defend_bonus
    } else {
        0
    };
    let dc = config.check.base_dc + evasion + armor + stance;

    let game_seed = env.game_seed();
    let roll = rng.roll_d20(compute_seed(
        game_seed,
        nonce,
        attacker_id.0,
        roll_context::CHECK,
    ));
    let check = skill_check(roll, modifier, dc, &config.check);

    let result = if check.success {
        // 3. Damage
        let (base, damage_type) = weapon
            .as_ref()
            .map(|w| (w.damage, w.damage_type))
            .unwrap_or((config.damage.unarmed, DamageType::Blunt));
        let variance_roll = rng.range(
            compute_seed(game_seed, nonce, attacker_id.0, roll_context::VARIANCE),
            0,
            config.damage.variance.saturating_mul(2),
        );
        AttackResult::Hit {
            damage: calculate_damage(base, level, variance_roll, check.critical, &config.damage),
            damage_type,
            critical: check.critical,
        }
    } else {
        // 4. Dodged when the roll would have landed without the defender's evasion.
        let was_dodged = !check.fumble && evasion > 0 && check.total() >= dc - evasion;
        AttackResult::Miss { was_dodged }
    };

    Ok(Resolution {
        skill,
        check: Some(check),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{ClassifierError, SkillClassifier};
    use crate::config::CombatConfig;
    use crate::state::skill_names as names;
    use crate::testing::{self, FixedRng, TestItems};

    struct Offline;

    impl SkillClassifier for Offline {
        fn classify(&self, _action_text: &str) -> Result<SkillName, ClassifierError> {
            Err(ClassifierError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn modifier_five_roll_fifteen_vs_dc_twelve_hits() {
        let world = testing::duel_world();
        let config = CombatConfig::default();
        let items = TestItems::standard();
        let rng = FixedRng::new(15);
        let env = CombatEnv::new(&config).with_items(&items).with_rng(&rng);

        let resolution = resolve(
            EntityId::PLAYER,
            EntityId(1),
            "attack goblin with sword",
            &world,
            &env,
            0,
        );

        let check = resolution.check.unwrap();
        assert_eq!(check.roll, 15);
        assert_eq!(check.modifier, 5);
        assert_eq!(check.dc, 12);
        assert_eq!(resolution.skill.as_str(), names::SWORD_FIGHTING);
        assert_eq!(
            resolution.result,
            AttackResult::Hit {
                damage: 9,
                damage_type: DamageType::Slashing,
                critical: false,
            }
        );
    }

    #[test]
    fn generic_text_uses_weapon_skill() {
        let world = testing::duel_world();
        let config = CombatConfig::default();
        let items = TestItems::standard();
        let rng = FixedRng::new(15);
        let env = CombatEnv::new(&config).with_items(&items).with_rng(&rng);

        let resolution = resolve(EntityId::PLAYER, EntityId(1), "attack", &world, &env, 0);
        assert_eq!(resolution.skill.as_str(), names::SWORD_FIGHTING);
    }

    #[test]
    fn miss_within_evasion_margin_is_dodged() {
        let world = testing::duel_world();
        let config = CombatConfig::default();
        let items = TestItems::standard();
        // 5 + 5 = 10: short of DC 12, but would meet DC 10 without dodge.
        let rng = FixedRng::new(5);
        let env = CombatEnv::new(&config).with_items(&items).with_rng(&rng);

        let result = resolve_attack(EntityId::PLAYER, EntityId(1), "sword", &world, &env, 0);
        assert_eq!(result, AttackResult::Miss { was_dodged: true });
        assert_eq!(result.damage(), 0);
    }

    #[test]
    fn miss_beyond_evasion_margin_is_plain() {
        let world = testing::duel_world();
        let config = CombatConfig::default();
        let items = TestItems::standard();
        let rng = FixedRng::new(2);
        let env = CombatEnv::new(&config).with_items(&items).with_rng(&rng);

        let result = resolve_attack(EntityId::PLAYER, EntityId(1), "sword", &world, &env, 0);
        assert_eq!(result, AttackResult::Miss { was_dodged: false });
    }

    #[test]
    fn natural_twenty_is_a_critical_hit() {
        let world = testing::duel_world();
        let config = CombatConfig::default();
        let items = TestItems::standard();
        let rng = FixedRng::new(20);
        let env = CombatEnv::new(&config).with_items(&items).with_rng(&rng);

        let result = resolve_attack(EntityId::PLAYER, EntityId(1), "sword", &world, &env, 0);
        assert_eq!(
            result,
            AttackResult::Hit {
                damage: 18,
                damage_type: DamageType::Slashing,
                critical: true,
            }
        );
    }

    #[test]
    fn defending_raises_the_dc() {
        let mut world = testing::duel_world();
        world.actor_mut(EntityId(1)).unwrap().defending = true;
        let config = CombatConfig::default();
        let items = TestItems::standard();
        let rng = FixedRng::new(8);
        let env = CombatEnv::new(&config).with_items(&items).with_rng(&rng);

        let resolution = resolve(EntityId::PLAYER, EntityId(1), "sword", &world, &env, 0);
        assert_eq!(resolution.check.unwrap().dc, 16);
        assert!(!resolution.result.is_hit());
    }

    #[test]
    fn missing_rng_is_a_failure_not_a_panic() {
        let world = testing::duel_world();
        let config = CombatConfig::default();
        let items = TestItems::standard();
        let env = CombatEnv::new(&config).with_items(&items);

        let result = resolve_attack(EntityId::PLAYER, EntityId(1), "sword", &world, &env, 0);
        assert!(result.is_failure());
        assert_eq!(result.damage(), 0);
    }

    #[test]
    fn classifier_error_is_a_failure() {
        let world = testing::duel_world();
        let config = CombatConfig::default();
        let items = TestItems::standard();
        let rng = FixedRng::new(15);
        let env = CombatEnv::new(&config)
            .with_items(&items)
            .with_rng(&rng)
            .with_classifier(&Offline);

        let result = resolve_attack(EntityId::PLAYER, EntityId(1), "sword", &world, &env, 0);
        assert!(matches!(
            result,
            AttackResult::Failure {
                reason: FailureReason::Classifier(_)
            }
        ));
    }

    #[test]
    fn unknown_defender_is_a_failure() {
        let world = testing::duel_world();
        let config = CombatConfig::default();
        let items = TestItems::standard();
        let rng = FixedRng::new(15);
        let env = CombatEnv::new(&config).with_items(&items).with_rng(&rng);

        let result = resolve_attack(EntityId::PLAYER, EntityId(42), "sword", &world, &env, 0);
        assert_eq!(
            result,
            AttackResult::Failure {
                reason: FailureReason::MissingCombatant(42)
            }
        );
    }

    #[test]
    fn hits_always_deal_at_least_one() {
        let world = testing::duel_world();
        let config = CombatConfig::default();
        let items = TestItems::standard();
        let rng = crate::env::PcgRng;
        let env = CombatEnv::new(&config).with_items(&items).with_rng(&rng);

        for nonce in 0..200 {
            let result = resolve_attack(EntityId(1), EntityId::PLAYER, "claw", &world, &env, nonce);
            if result.is_hit() {
                assert!(result.damage() >= 1);
            }
        }
    }
}
