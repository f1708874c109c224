//! Topic-based event bus implementation.

use combat_core::LogEntry;
use serde::Serialize;
use tokio::sync::broadcast;

use super::types::TurnEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize)]
pub enum Topic {
    /// Combat log entries, in log order
    Combat,
    /// Turn summaries
    Turn,
}

/// Event wrapper that carries the typed payload
#[derive(Debug, Clone, Serialize)]
pub enum Event {
    Combat(LogEntry),
    Turn(TurnEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Combat(_) => Topic::Combat,
            Event::Turn(_) => Topic::Turn,
        }
    }

    /// One-line JSON rendering for presentation layers and trace files.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Topic-based event bus
///
/// Publishing never blocks and never fails: events are best-effort and a
/// topic without subscribers simply drops them.
#[derive(Clone)]
pub struct EventBus {
    combat: broadcast::Sender<Event>,
    turn: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            combat: broadcast::channel(capacity).0,
            turn: broadcast::channel(capacity).0,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Combat => &self.combat,
            Topic::Turn => &self.turn,
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
