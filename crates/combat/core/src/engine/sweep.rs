//! NPC turn processing.
//!
//! The sweep drains every queue entry that is ready at the current clock.
//! Actors standing with the player decide and act; actors elsewhere are
//! deferred without acting. Each surviving actor is re-enqueued at
//! `clock + cost`, which is strictly in the future, so the sweep always
//! terminates. A failure for one actor is recorded and processing continues.

use crate::ai::{AiDecision, decide_action};
use crate::log::CombatEvent;
use crate::schedule::ActionKind;
use crate::state::{EntityId, Tick};

use super::{GameEngine, StrikeReport};

/// Why a dequeued actor was dropped without acting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The actor is no longer in the world.
    StaleReference,
    /// The actor is dead.
    Dead,
    /// Only NPCs take queued turns.
    NotAnNpc,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::StaleReference => "stale reference",
            Self::Dead => "dead",
            Self::NotAnNpc => "not an npc",
        })
    }
}

/// Per-actor outcome of one sweep step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SweepEvent {
    Acted {
        actor: EntityId,
        decision: AiDecision,
        strike: Option<StrikeReport>,
        /// `None` when the actor died while acting.
        next_turn: Option<Tick>,
    },
    /// Not co-located with the player; re-enqueued without acting.
    Deferred { actor: EntityId, ready_at: Tick },
    Skipped { actor: EntityId, reason: SkipReason },
    /// The decision could not be carried out; treated as a wait.
    Failed {
        actor: EntityId,
        reason: String,
        next_turn: Option<Tick>,
    },
}

/// Everything one sweep did, in processing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub clock: Tick,
    pub events: Vec<SweepEvent>,
    /// The player died during the sweep; remaining entries were left queued.
    pub player_died: bool,
}

impl SweepReport {
    pub fn strikes(&self) -> impl Iterator<Item = &StrikeReport> {
        self.events.iter().filter_map(|event| match event {
            SweepEvent::Acted {
                strike: Some(strike),
                ..
            } => Some(strike),
            _ => None,
        })
    }

    pub fn acted(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SweepEvent::Acted { .. }))
            .count()
    }
}

impl GameEngine<'_, '_> {
    /// Processes every NPC whose turn is due at the current clock.
    ///
    /// Runs to quiescence: on return the queue head (if any) is in the future,
    /// or the player is dead.
    pub fn run_sweep(&mut self) -> SweepReport {
        let now = self.clock();
        let mut report = SweepReport {
            clock: now,
            ..SweepReport::default()
        };

        loop {
            if self.living_player().is_err() {
                report.player_died = true;
                break;
            }
            let Some(actor) = self.state.queue.dequeue(now) else {
                break;
            };
            let event = self.process_turn(actor);
            report.events.push(event);
        }

        report
    }

    fn process_turn(&mut self, actor: EntityId) -> SweepEvent {
        let reason = match self.state.world.actor(actor) {
            None => Some(SkipReason::StaleReference),
            Some(state) if state.is_dead() => Some(SkipReason::Dead),
            Some(state) if !state.is_npc() => Some(SkipReason::NotAnNpc),
            Some(_) => None,
        };
        if let Some(reason) = reason {
            self.record(CombatEvent::Skipped {
                actor,
                reason: reason.to_string(),
            });
            return SweepEvent::Skipped { actor, reason };
        }

        if !self.state.world.is_with_player(actor) {
            return match self.schedule_after(actor, ActionKind::Wait) {
                Ok(ready_at) => {
                    self.record(CombatEvent::Deferred { actor, ready_at });
                    SweepEvent::Deferred { actor, ready_at }
                }
                Err(error) => SweepEvent::Failed {
                    actor,
                    reason: error.to_string(),
                    next_turn: None,
                },
            };
        }

        // A defensive stance lasts until the actor's next turn.
        if let Some(state) = self.state.world.actor_mut(actor) {
            state.defending = false;
        }

        let decision = decide_action(actor, &self.state.world, &self.env);
        match self.execute_decision(actor, &decision) {
            Ok(strike) => {
                let next_turn = self.reschedule(actor, decision.action_kind());
                SweepEvent::Acted {
                    actor,
                    decision,
                    strike,
                    next_turn,
                }
            }
            Err(reason) => {
                self.record(CombatEvent::Skipped {
                    actor,
                    reason: reason.clone(),
                });
                let next_turn = self.reschedule(actor, ActionKind::Wait);
                SweepEvent::Failed {
                    actor,
                    reason,
                    next_turn,
                }
            }
        }
    }

    /// Re-enqueues a surviving actor. Dead or removed actors stay out.
    fn reschedule(&mut self, actor: EntityId, kind: ActionKind) -> Option<Tick> {
        self.schedule_after(actor, kind).ok()
    }
}
