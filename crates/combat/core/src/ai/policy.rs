//! NPC decision policy.
//!
//! Each preset is a priority tree evaluated top to bottom, first match wins:
//!
//! ```text
//! Standard
//!   └─ Selector
//!       ├─ hp < flee threshold  ∧ exit available      → Flee
//!       ├─ hp < low threshold   ∧ healing item carried → UseItem
//!       ├─ hostile ∧ player co-located                 → Attack
//!       ├─ hostile (player elsewhere)                  → Wait
//!       └─ otherwise                                   → Wait
//! ```
//!
//! `Cautious` inserts a Defend branch before Attack for hostile actors at low
//! hp with nothing better to do.

use strum::{Display, EnumIter};

use crate::env::CombatEnv;
use crate::state::{EntityId, WorldState};

use super::behavior::{Action, Behavior, Condition, Node, Selector, Sequence};
use super::{AiDecision, DecisionContext};

/// Named decision tree an NPC follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum AiPreset {
    #[default]
    Standard,
    Cautious,
}

type Tree<'a> = Selector<'a, DecisionContext<'a>>;
type Branch<'a> = Node<'a, DecisionContext<'a>>;
type Predicate<'a> = fn(&DecisionContext<'a>) -> bool;

fn when<'a>(conditions: &[Predicate<'a>], act: fn(&mut DecisionContext<'a>) -> bool) -> Branch<'a> {
    let mut children: Vec<Branch<'a>> = conditions
        .iter()
        .map(|&predicate| Box::new(Condition::new(predicate)) as Branch<'a>)
        .collect();
    children.push(Box::new(Action::new(act)));
    Box::new(Sequence::new(children))
}

// Conditions

fn below_flee_threshold(ctx: &DecisionContext<'_>) -> bool {
    ctx.below_flee_threshold()
}

fn below_low_hp(ctx: &DecisionContext<'_>) -> bool {
    ctx.below_low_hp()
}

fn hostile(ctx: &DecisionContext<'_>) -> bool {
    ctx.is_hostile()
}

fn player_present(ctx: &DecisionContext<'_>) -> bool {
    ctx.co_located_player().is_some()
}

// Actions

fn flee(ctx: &mut DecisionContext<'_>) -> bool {
    match ctx.flee_exit() {
        Some(to) => ctx.decide(AiDecision::Flee { to }),
        None => false,
    }
}

fn use_healing_item(ctx: &mut DecisionContext<'_>) -> bool {
    match ctx.healing_item() {
        Some(item) => ctx.decide(AiDecision::UseItem { item }),
        None => false,
    }
}

fn attack_player(ctx: &mut DecisionContext<'_>) -> bool {
    match ctx.co_located_player() {
        Some(target) => ctx.decide(AiDecision::Attack { target }),
        None => false,
    }
}

fn defend(ctx: &mut DecisionContext<'_>) -> bool {
    ctx.decide(AiDecision::Defend)
}

fn wait(ctx: &mut DecisionContext<'_>) -> bool {
    ctx.decide(AiDecision::Wait)
}

impl AiPreset {
    fn tree<'a>(self) -> Tree<'a> {
        let below_flee: Predicate<'a> = below_flee_threshold;
        let below_low: Predicate<'a> = below_low_hp;
        let hostile: Predicate<'a> = hostile;
        let present: Predicate<'a> = player_present;

        let mut branches: Vec<Branch<'a>> = vec![
            when(&[below_flee], flee),
            when(&[below_low], use_healing_item),
        ];
        if self == Self::Cautious {
            branches.push(when(&[hostile, present, below_low], defend));
        }
        branches.push(when(&[hostile, present], attack_player));
        branches.push(when(&[hostile], wait));
        branches.push(when(&[], wait));
        Selector::new(branches)
    }
}

/// Chooses the next action for `actor` using its own preset.
///
/// Returns [`AiDecision::Error`] when the actor, its location or its life
/// cannot support a decision. It never panics.
pub fn decide_action(actor: EntityId, world: &WorldState, env: &CombatEnv<'_>) -> AiDecision {
    let preset = match world.actor(actor) {
        Some(state) => state.ai,
        None => return AiDecision::error(format!("actor {actor} not found")),
    };
    decide_with(preset, actor, world, env)
}

/// Chooses the next action for `actor` with an explicit preset.
pub fn decide_with(
    preset: AiPreset,
    actor: EntityId,
    world: &WorldState,
    env: &CombatEnv<'_>,
) -> AiDecision {
    let Some(state) = world.actor(actor) else {
        return AiDecision::error(format!("actor {actor} not found"));
    };
    if state.is_dead() {
        return AiDecision::error(format!("actor {actor} is dead"));
    }
    let Some(location) = world.location(state.location) else {
        return AiDecision::error(format!("location {} not found", state.location));
    };

    let mut ctx = DecisionContext::new(
        state,
        world,
        location,
        env.items().ok(),
        &env.config().ai,
    );
    preset.tree().tick(&mut ctx);
    ctx.into_decision()
        .unwrap_or_else(|| AiDecision::error("no branch produced a decision"))
}
