//! Oracle adapters for the combat core.
mod items;

pub use items::ItemOracleImpl;
