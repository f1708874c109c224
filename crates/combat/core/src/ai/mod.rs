//! NPC decision making.
//!
//! [`decide_action`] evaluates the actor's [`AiPreset`] tree against a
//! [`DecisionContext`] snapshot and returns one [`AiDecision`]. Nothing here
//! mutates state; the engine executes the decision.
pub mod behavior;
mod context;
mod decision;
mod policy;

pub use context::DecisionContext;
pub use decision::AiDecision;
pub use policy::{AiPreset, decide_action, decide_with};
