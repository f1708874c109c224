//! Turn scheduling: the action cost model and the turn queue.

mod cost;
mod queue;

pub use cost::{ActionKind, calculate_action_cost};
pub use queue::{QueueEntry, TurnQueue};
