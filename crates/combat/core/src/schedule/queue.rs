//! Time-ordered schedule of actors waiting for their next turn.

use std::collections::{BTreeMap, BTreeSet};

use crate::state::{EntityId, Tick};

/// A single schedule entry: `actor` may act once the clock reaches `ready_at`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueEntry {
    pub actor: EntityId,
    pub ready_at: Tick,
}

/// Ordering key: ascending tick, then insertion sequence.
type Slot = (Tick, u64, EntityId);

/// Priority schedule of `(actor, ready_at)` pairs.
///
/// # Invariants
///
/// - At most one live entry per actor; `enqueue` on a queued actor supersedes
///   the previous entry instead of duplicating it.
/// - Entries are ordered by `ready_at`, ties broken by insertion order, so the
///   same sequence of calls always yields the same dequeue order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnQueue {
    order: BTreeSet<Slot>,
    live: BTreeMap<EntityId, (Tick, u64)>,
    next_seq: u64,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `actor` at `ready_at`, replacing its existing entry if any.
    pub fn enqueue(&mut self, actor: EntityId, ready_at: Tick) {
        self.remove(actor);

        let seq = self.next_seq;
        self.next_seq += 1;

        self.order.insert((ready_at, seq, actor));
        self.live.insert(actor, (ready_at, seq));
    }

    /// Returns the earliest entry without removing it.
    pub fn peek(&self) -> Option<QueueEntry> {
        self.order
            .first()
            .map(|&(ready_at, _, actor)| QueueEntry { actor, ready_at })
    }

    /// Removes and returns the earliest actor if it is ready at `current`.
    ///
    /// Leaves the queue untouched when the head is still in the future.
    pub fn dequeue(&mut self, current: Tick) -> Option<EntityId> {
        let &(ready_at, _, actor) = self.order.first()?;
        if ready_at > current {
            return None;
        }
        self.order.pop_first();
        self.live.remove(&actor);
        Some(actor)
    }

    /// Drops the entry for `actor`. Returns true if it was queued.
    pub fn remove(&mut self, actor: EntityId) -> bool {
        match self.live.remove(&actor) {
            Some((ready_at, seq)) => {
                self.order.remove(&(ready_at, seq, actor));
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, actor: EntityId) -> bool {
        self.live.contains_key(&actor)
    }

    pub fn ready_at(&self, actor: EntityId) -> Option<Tick> {
        self.live.get(&actor).map(|&(ready_at, _)| ready_at)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Entries in dequeue order.
    pub fn iter(&self) -> impl Iterator<Item = QueueEntry> + '_ {
        self.order
            .iter()
            .map(|&(ready_at, _, actor)| QueueEntry { actor, ready_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dequeues_in_time_then_insertion_order() {
        let mut queue = TurnQueue::new();
        queue.enqueue(EntityId(3), Tick(10));
        queue.enqueue(EntityId(1), Tick(5));
        queue.enqueue(EntityId(2), Tick(10));

        assert_eq!(queue.dequeue(Tick(10)), Some(EntityId(1)));
        assert_eq!(queue.dequeue(Tick(10)), Some(EntityId(3)));
        assert_eq!(queue.dequeue(Tick(10)), Some(EntityId(2)));
        assert_eq!(queue.dequeue(Tick(10)), None);
    }

    #[test]
    fn dequeue_ignores_future_entries_without_mutating() {
        let mut queue = TurnQueue::new();
        queue.enqueue(EntityId(1), Tick(8));

        assert_eq!(queue.dequeue(Tick(7)), None);
        assert_eq!(queue.len(), 1);
        assert_eq!(
            queue.peek(),
            Some(QueueEntry {
                actor: EntityId(1),
                ready_at: Tick(8)
            })
        );
    }

    #[test]
    fn enqueue_supersedes_existing_entry() {
        let mut queue = TurnQueue::new();
        queue.enqueue(EntityId(1), Tick(2));
        queue.enqueue(EntityId(2), Tick(4));
        queue.enqueue(EntityId(1), Tick(9));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.ready_at(EntityId(1)), Some(Tick(9)));
        assert_eq!(queue.dequeue(Tick(100)), Some(EntityId(2)));
        assert_eq!(queue.dequeue(Tick(100)), Some(EntityId(1)));
    }

    #[test]
    fn rescheduled_tie_goes_behind_earlier_insertions() {
        let mut queue = TurnQueue::new();
        queue.enqueue(EntityId(1), Tick(5));
        queue.enqueue(EntityId(2), Tick(5));
        queue.enqueue(EntityId(1), Tick(5));

        assert_eq!(queue.dequeue(Tick(5)), Some(EntityId(2)));
        assert_eq!(queue.dequeue(Tick(5)), Some(EntityId(1)));
    }

    #[test]
    fn remove_drops_entry() {
        let mut queue = TurnQueue::new();
        queue.enqueue(EntityId(1), Tick(1));
        assert!(queue.remove(EntityId(1)));
        assert!(!queue.remove(EntityId(1)));
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
    }

    proptest! {
        #[test]
        fn drains_sorted_and_never_repeats(
            entries in prop::collection::vec((0u32..8, 0u64..50), 0..40),
            now in 0u64..60,
        ) {
            let mut queue = TurnQueue::new();
            for &(actor, tick) in &entries {
                queue.enqueue(EntityId(actor), Tick(tick));
            }
            let live = queue.len();

            let mut seen = std::collections::HashSet::new();
            let mut last = Tick::ZERO;
            while let Some(actor) = queue.dequeue(Tick(now)) {
                prop_assert!(seen.insert(actor), "actor dequeued twice");
                let ready = entries
                    .iter()
                    .rev()
                    .find(|(id, _)| EntityId(*id) == actor)
                    .map(|&(_, tick)| Tick(tick))
                    .unwrap();
                prop_assert!(ready <= Tick(now));
                prop_assert!(ready >= last);
                last = ready;
            }

            prop_assert!(queue.iter().all(|entry| entry.ready_at > Tick(now)));
            prop_assert_eq!(seen.len() + queue.len(), live);
        }
    }
}
