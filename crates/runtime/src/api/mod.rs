//! Public runtime API surface.
//!
//! Service seams, per-turn reports and errors that downstream clients
//! interact with.

pub mod errors;
pub mod report;
pub mod services;

pub use errors::{NarratorError, Result, RuntimeError};
pub use report::{NarrationLine, TurnReport};
pub use services::{
    ClassifierService, KeywordClassifierService, NarrationRequest, Narrator, TemplateNarrator,
};
