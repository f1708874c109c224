//! Minimal [`combat_core::ItemOracle`] backed by an in-memory map.
use std::collections::HashMap;

use combat_core::{ItemDefinition, ItemId, ItemOracle};

/// ItemOracle implementation with static item definitions
#[derive(Clone, Debug, Default)]
pub struct ItemOracleImpl {
    definitions: HashMap<ItemId, ItemDefinition>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an oracle from a loaded catalog. Later duplicates win.
    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut oracle = Self::new();
        for definition in definitions {
            oracle.add_definition(definition);
        }
        oracle
    }

    /// Add an item definition
    pub fn add_definition(&mut self, def: ItemDefinition) {
        self.definitions.insert(def.id, def);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ItemOracle for ItemOracleImpl {
    fn definition(&self, id: ItemId) -> Option<ItemDefinition> {
        self.definitions.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use combat_core::{ConsumableData, ItemKind};

    use super::*;

    #[test]
    fn lookups_follow_item_kind() {
        let oracle = ItemOracleImpl::from_definitions([ItemDefinition::new(
            ItemId(20),
            "Healing Draught",
            ItemKind::Consumable(ConsumableData { heal: 8 }),
        )]);

        assert_eq!(oracle.healing(ItemId(20)), Some(8));
        assert_eq!(oracle.weapon(ItemId(20)), None);
        assert!(oracle.definition(ItemId(21)).is_none());
    }
}
