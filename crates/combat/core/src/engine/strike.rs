//! Attacks, damage application and the death transition.

use crate::combat::{AttackResult, fallback_damage, resolve};
use crate::log::CombatEvent;
use crate::schedule::ActionKind;
use crate::state::{DamageOutcome, EntityId, SkillName, Tick};

use super::{EngineError, GameEngine, HostilityChange};

/// Everything one attack changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrikeReport {
    pub attacker: EntityId,
    pub defender: EntityId,
    pub skill: SkillName,
    pub result: AttackResult,
    /// Deterministic damage applied because resolution failed.
    pub fallback_damage: Option<u32>,
    /// Present when any damage was applied.
    pub damage: Option<DamageOutcome>,
    /// Hostility effect on the defender (player attacks only).
    pub hostility: Option<HostilityChange>,
    /// Ticks the attacker spent (player attacks only; NPC costs are
    /// reported by the sweep).
    pub cost: u64,
}

impl StrikeReport {
    pub fn defender_died(&self) -> bool {
        self.damage.is_some_and(|outcome| outcome.died)
    }

    /// Damage that reached the defender, fallback included.
    pub fn damage_dealt(&self) -> u32 {
        self.damage.map(|outcome| outcome.dealt()).unwrap_or(0)
    }
}

impl GameEngine<'_, '_> {
    /// The player attacks `target`, described by `action_text`.
    ///
    /// Resolves the attack, applies damage, turns a surviving NPC hostile
    /// (admitting it to the turn queue) and finally advances the clock by the
    /// player's melee cost. NPC turns are not processed here; call
    /// [`GameEngine::run_sweep`] afterwards.
    ///
    /// The target must stand with the player. A rejected attack changes
    /// nothing.
    pub fn player_attack(
        &mut self,
        target: EntityId,
        action_text: &str,
    ) -> Result<StrikeReport, EngineError> {
        let player = self.living_player()?;
        let (player_id, player_location) = (player.id, player.location);
        if target == player_id {
            return Err(EngineError::SelfTarget(target));
        }
        if self.living(target)?.location != player_location {
            return Err(EngineError::NotAtLocation {
                actor: target,
                location: player_location,
            });
        }
        let cost = self.action_cost(player_id, ActionKind::MeleeAttack)?;

        let mut report = self.strike(player_id, target, action_text);

        if !report.defender_died() && self.actor(target)?.is_npc() {
            let penalty = self.env.config().disposition.attack_penalty;
            let collapsed = self.adjust_disposition(target, penalty)?;
            let change = match collapsed {
                Some(change) => change,
                None => self.trigger_counter_attack(target, player_location)?,
            };
            report.hostility = Some(change);
        }

        self.advance_clock(cost);
        report.cost = cost;
        Ok(report)
    }

    /// The player spends a turn on a non-attack action of `kind`.
    ///
    /// Returns the new clock value.
    pub fn player_wait(&mut self, kind: ActionKind) -> Result<Tick, EngineError> {
        let player = self.living_player()?.id;
        let cost = self.action_cost(player, kind)?;
        self.record(CombatEvent::Waited {
            actor: player,
            kind,
        });
        self.advance_clock(cost);
        Ok(self.clock())
    }

    /// Applies `damage` to `target`: `hp' = max(0, hp - damage)`.
    ///
    /// On the death transition a dead NPC is removed from the world and the
    /// turn queue. A dead player stays in the world, marked dead, so the
    /// encounter can report the loss.
    pub fn apply_damage(
        &mut self,
        target: EntityId,
        damage: u32,
    ) -> Result<DamageOutcome, EngineError> {
        let actor = self
            .state
            .world
            .actor_mut(target)
            .ok_or(EngineError::ActorNotFound(target))?;
        let outcome = actor.combat.apply_damage(damage);
        let is_player = !actor.is_npc();

        self.record(CombatEvent::Damaged {
            target,
            dealt: outcome.dealt(),
            remaining: outcome.current_hp,
        });

        if outcome.died {
            self.record(CombatEvent::Died { actor: target });
            self.state.queue.remove(target);
            if !is_player {
                self.state.world.remove(target);
            }
        }
        Ok(outcome)
    }

    /// Resolves and applies one attack. Never fails: resolution problems
    /// become a fallback damage event.
    pub(super) fn strike(
        &mut self,
        attacker: EntityId,
        defender: EntityId,
        action_text: &str,
    ) -> StrikeReport {
        let nonce = self.state.turn.next_nonce();
        let resolution = resolve(
            attacker,
            defender,
            action_text,
            &self.state.world,
            &self.env,
            nonce,
        );

        self.record(CombatEvent::Attack {
            attacker,
            defender,
            skill: resolution.skill.clone(),
            result: resolution.result.clone(),
        });

        let mut fallback = None;
        let applied = match &resolution.result {
            AttackResult::Hit { damage, .. } => *damage,
            AttackResult::Miss { .. } => 0,
            AttackResult::Failure { .. } => {
                let defender_alive = self
                    .state
                    .world
                    .actor(defender)
                    .is_some_and(|actor| !actor.is_dead());
                if defender_alive {
                    let damage = self.fallback_damage_for(attacker);
                    self.record(CombatEvent::FallbackDamage {
                        attacker,
                        defender,
                        damage,
                    });
                    fallback = Some(damage);
                    damage
                } else {
                    0
                }
            }
        };

        let damage = if applied > 0 {
            self.apply_damage(defender, applied).ok()
        } else {
            None
        };

        StrikeReport {
            attacker,
            defender,
            skill: resolution.skill,
            result: resolution.result,
            fallback_damage: fallback,
            damage,
            hostility: None,
            cost: 0,
        }
    }

    fn fallback_damage_for(&self, attacker: EntityId) -> u32 {
        let weapon_damage = self
            .state
            .world
            .actor(attacker)
            .and_then(|actor| actor.equipment.weapon)
            .and_then(|weapon| {
                let items = self.env.items().ok()?;
                items.weapon(weapon).map(|data| data.damage)
            });
        fallback_damage(weapon_damage, &self.env.config().damage)
    }

    pub(super) fn advance_clock(&mut self, ticks: u64) {
        self.state.turn.advance(ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombatConfig;
    use crate::env::CombatEnv;
    use crate::state::GameState;
    use crate::state::Standing;
    use crate::testing::{self, CELLAR, FixedRng, GOBLIN, HALL, TestItems};

    #[test]
    fn hit_reduces_hp_and_advances_clock() {
        let mut state = GameState::new(testing::duel_world());
        let config = CombatConfig::default();
        let items = TestItems::standard();
        let rng = FixedRng::new(15);
        let env = CombatEnv::new(&config).with_items(&items).with_rng(&rng);
        let mut engine = GameEngine::new(&mut state, env);

        let report = engine.player_attack(GOBLIN, "slash with sword").unwrap();

        assert_eq!(report.damage_dealt(), 9);
        assert_eq!(report.cost, 5);
        assert_eq!(engine.clock(), Tick(5));
        assert_eq!(
            state.world.actor(GOBLIN).map(|g| g.combat.current_hp()),
            Some(3)
        );
    }

    #[test]
    fn lethal_hit_removes_npc_from_world_and_queue() {
        let mut world = testing::duel_world();
        world.actor_mut(GOBLIN).unwrap().combat = crate::state::CombatState::with_current(4, 12);
        let mut state = GameState::new(world);
        state.queue.enqueue(GOBLIN, Tick(50));
        let config = CombatConfig::default();
        let items = TestItems::standard();
        let rng = FixedRng::new(15);
        let env = CombatEnv::new(&config).with_items(&items).with_rng(&rng);
        let mut engine = GameEngine::new(&mut state, env);

        let report = engine.player_attack(GOBLIN, "sword").unwrap();

        assert!(report.defender_died());
        assert!(report.hostility.is_none());
        assert!(!state.world.contains(GOBLIN));
        assert!(!state.queue.contains(GOBLIN));
    }

    #[test]
    fn failed_resolution_applies_fallback_damage() {
        let mut state = GameState::new(testing::duel_world());
        let config = CombatConfig::default();
        let items = TestItems::standard();
        // No rng: resolution fails.
        let env = CombatEnv::new(&config).with_items(&items);
        let mut engine = GameEngine::new(&mut state, env);

        let report = engine.player_attack(GOBLIN, "sword").unwrap();

        assert!(report.result.is_failure());
        assert_eq!(report.result.damage(), 0);
        // Half of the sword's 6 damage.
        assert_eq!(report.fallback_damage, Some(3));
        assert_eq!(report.damage_dealt(), 3);
    }

    #[test]
    fn miss_applies_no_damage() {
        let mut state = GameState::new(testing::duel_world());
        let config = CombatConfig::default();
        let items = TestItems::standard();
        let rng = FixedRng::new(1);
        let env = CombatEnv::new(&config).with_items(&items).with_rng(&rng);
        let mut engine = GameEngine::new(&mut state, env);

        let report = engine.player_attack(GOBLIN, "sword").unwrap();

        assert_eq!(report.result, AttackResult::Miss { was_dodged: false });
        assert!(report.damage.is_none());
        assert_eq!(
            state.world.actor(GOBLIN).map(|g| g.combat.current_hp()),
            Some(12)
        );
    }

    #[test]
    fn attacking_unknown_or_self_is_rejected() {
        let mut state = GameState::new(testing::duel_world());
        let config = CombatConfig::default();
        let mut engine = GameEngine::new(&mut state, CombatEnv::new(&config));

        assert_eq!(
            engine.player_attack(EntityId(40), "sword").unwrap_err(),
            EngineError::ActorNotFound(EntityId(40))
        );
        assert_eq!(
            engine.player_attack(EntityId::PLAYER, "sword").unwrap_err(),
            EngineError::SelfTarget(EntityId::PLAYER)
        );
    }

    #[test]
    fn attacking_npc_in_another_room_changes_nothing() {
        let mut world = testing::duel_world();
        let goblin = world.actor_mut(GOBLIN).unwrap();
        goblin.location = CELLAR;
        goblin.standing = Standing::Hostile;
        let mut state = GameState::new(world);
        let before = state.clone();
        let config = CombatConfig::default();
        let items = TestItems::standard();
        let rng = FixedRng::new(15);
        let env = CombatEnv::new(&config).with_items(&items).with_rng(&rng);
        let mut engine = GameEngine::new(&mut state, env);

        assert_eq!(
            engine.player_attack(GOBLIN, "sword").unwrap_err(),
            EngineError::NotAtLocation {
                actor: GOBLIN,
                location: HALL,
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn player_death_keeps_player_in_world() {
        let mut state = GameState::new(testing::duel_world());
        let config = CombatConfig::default();
        let mut engine = GameEngine::new(&mut state, CombatEnv::new(&config));

        let outcome = engine.apply_damage(EntityId::PLAYER, 500).unwrap();

        assert!(outcome.died);
        assert_eq!(
            engine.player_wait(ActionKind::Wait).unwrap_err(),
            EngineError::PlayerDead
        );
        assert!(state.world.player().is_some_and(|p| p.is_dead()));
    }
}
