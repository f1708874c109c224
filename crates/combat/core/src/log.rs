//! Ordered record of everything the engine decided.
//!
//! The core never logs through a subscriber; instead each observable decision
//! is appended here with the tick it happened at. Rendering is stable, so two
//! runs with the same seed and queue order produce identical text.

use std::fmt;

use crate::combat::AttackResult;
use crate::schedule::ActionKind;
use crate::state::{EntityId, ItemId, LocationId, SkillName, Tick};

/// One observable combat occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CombatEvent {
    Attack {
        attacker: EntityId,
        defender: EntityId,
        skill: SkillName,
        result: AttackResult,
    },
    /// Deterministic damage applied because resolution failed.
    FallbackDamage {
        attacker: EntityId,
        defender: EntityId,
        damage: u32,
    },
    Damaged {
        target: EntityId,
        dealt: u32,
        remaining: u32,
    },
    Died {
        actor: EntityId,
    },
    DispositionChanged {
        actor: EntityId,
        from: i32,
        to: i32,
    },
    BecameHostile {
        actor: EntityId,
    },
    Scheduled {
        actor: EntityId,
        ready_at: Tick,
    },
    Defended {
        actor: EntityId,
    },
    UsedItem {
        actor: EntityId,
        item: ItemId,
        healed: u32,
    },
    Fled {
        actor: EntityId,
        from: LocationId,
        to: LocationId,
    },
    Waited {
        actor: EntityId,
        kind: ActionKind,
    },
    /// The actor was dequeued elsewhere and re-enqueued without acting.
    Deferred {
        actor: EntityId,
        ready_at: Tick,
    },
    /// A dequeued actor could not act; processing continued with the next one.
    Skipped {
        actor: EntityId,
        reason: String,
    },
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack {
                attacker,
                defender,
                skill,
                result,
            } => {
                write!(f, "{attacker} attacks {defender} using {skill}: ")?;
                match result {
                    AttackResult::Hit {
                        damage,
                        damage_type,
                        critical,
                    } => {
                        let label = if *critical { "critical hit" } else { "hit" };
                        write!(f, "{label} for {damage} {damage_type}")
                    }
                    AttackResult::Miss { was_dodged: true } => f.write_str("dodged"),
                    AttackResult::Miss { was_dodged: false } => f.write_str("miss"),
                    AttackResult::Failure { reason } => write!(f, "failed ({reason})"),
                }
            }
            Self::FallbackDamage {
                attacker,
                defender,
                damage,
            } => write!(f, "{attacker} falls back to {damage} damage on {defender}"),
            Self::Damaged {
                target,
                dealt,
                remaining,
            } => write!(f, "{target} takes {dealt} ({remaining} hp left)"),
            Self::Died { actor } => write!(f, "{actor} dies"),
            Self::DispositionChanged { actor, from, to } => {
                write!(f, "{actor} disposition {from} -> {to}")
            }
            Self::BecameHostile { actor } => write!(f, "{actor} turns hostile"),
            Self::Scheduled { actor, ready_at } => write!(f, "{actor} scheduled at {ready_at}"),
            Self::Defended { actor } => write!(f, "{actor} defends"),
            Self::UsedItem {
                actor,
                item,
                healed,
            } => write!(f, "{actor} uses {item}, heals {healed}"),
            Self::Fled { actor, from, to } => write!(f, "{actor} flees {from} -> {to}"),
            Self::Waited { actor, kind } => write!(f, "{actor} waits ({kind})"),
            Self::Deferred { actor, ready_at } => {
                write!(f, "{actor} is away, deferred to {ready_at}")
            }
            Self::Skipped { actor, reason } => write!(f, "{actor} skipped: {reason}"),
        }
    }
}

/// A [`CombatEvent`] stamped with the tick it occurred at.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LogEntry {
    pub tick: Tick,
    pub event: CombatEvent,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[t={}] {}", self.tick, self.event)
    }
}

/// Append-only list of log entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombatLog {
    entries: Vec<LogEntry>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tick: Tick, event: CombatEvent) {
        self.entries.push(LogEntry { tick, event });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries appended at or after `cursor`, for incremental consumers.
    pub fn since(&self, cursor: usize) -> &[LogEntry] {
        self.entries.get(cursor..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the log one entry per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_line_per_entry() {
        let mut log = CombatLog::new();
        log.push(Tick(0), CombatEvent::BecameHostile { actor: EntityId(1) });
        log.push(
            Tick(5),
            CombatEvent::Scheduled {
                actor: EntityId(1),
                ready_at: Tick(10),
            },
        );

        assert_eq!(
            log.render(),
            "[t=0] #1 turns hostile\n[t=5] #1 scheduled at 10\n"
        );
    }

    #[test]
    fn since_returns_suffix() {
        let mut log = CombatLog::new();
        log.push(Tick(0), CombatEvent::Died { actor: EntityId(2) });
        log.push(Tick(1), CombatEvent::Died { actor: EntityId(3) });

        assert_eq!(log.since(1).len(), 1);
        assert!(log.since(7).is_empty());
    }
}
