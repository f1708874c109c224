//! Action cost model.
//!
//! Formula: `cost = max(base_cost(kind) - speed / speed_levels_per_tick, floor)`
//! where `floor = max(min_cost, 1)`.
//!
//! The result is non-increasing in speed and never below one tick, so an actor
//! re-enqueued at `clock + cost` is always strictly in the future.

use strum::{Display, EnumIter};

use crate::config::CostTable;

/// Action categories with distinct time costs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    MeleeAttack,
    Defend,
    UseItem,
    Flee,
    Wait,
}

/// Calculate the tick cost of `kind` for an actor at `speed_level`.
///
/// # Examples
///
/// With the default table (melee base 5, floor 2):
/// - speed 0: `5 - 0 = 5`
/// - speed 2: `5 - 2 = 3`
/// - speed 10: `5 - 10` clamps to the floor `2`
pub fn calculate_action_cost(kind: ActionKind, speed_level: u32, costs: &CostTable) -> u64 {
    let floor = costs.min_cost.max(1);
    let per_tick = costs.speed_levels_per_tick.max(1);
    let reduction = (speed_level / per_tick) as u64;

    costs.base(kind).saturating_sub(reduction).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    #[test]
    fn melee_at_speed_zero_costs_base() {
        let table = CostTable::default();
        assert_eq!(calculate_action_cost(ActionKind::MeleeAttack, 0, &table), 5);
    }

    #[test]
    fn melee_at_speed_ten_hits_documented_floor() {
        let table = CostTable::default();
        assert_eq!(
            calculate_action_cost(ActionKind::MeleeAttack, 10, &table),
            CostTable::DEFAULT_MIN_COST
        );
    }

    #[test]
    fn zero_floor_still_costs_one_tick() {
        let table = CostTable {
            min_cost: 0,
            wait: 0,
            ..CostTable::default()
        };
        assert_eq!(calculate_action_cost(ActionKind::Wait, 50, &table), 1);
    }

    #[test]
    fn slower_speed_scaling_needs_more_levels() {
        let table = CostTable {
            speed_levels_per_tick: 3,
            ..CostTable::default()
        };
        assert_eq!(calculate_action_cost(ActionKind::MeleeAttack, 2, &table), 5);
        assert_eq!(calculate_action_cost(ActionKind::MeleeAttack, 3, &table), 4);
    }

    proptest! {
        #[test]
        fn cost_is_non_increasing_and_positive(
            speed in 0u32..1000,
            base in 0u64..50,
            per_tick in 0u32..5,
            min_cost in 0u64..5,
        ) {
            let table = CostTable {
                melee_attack: base,
                defend: base,
                use_item: base,
                flee: base,
                wait: base,
                speed_levels_per_tick: per_tick,
                min_cost,
            };
            for kind in ActionKind::iter() {
                let slow = calculate_action_cost(kind, speed, &table);
                let fast = calculate_action_cost(kind, speed + 1, &table);
                prop_assert!(slow >= 1);
                prop_assert!(fast <= slow);
            }
        }
    }
}
