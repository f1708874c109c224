//! d20 skill check: `roll + modifier >= dc`.

use crate::config::CheckRules;

/// Outcome of a single skill check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Natural die face (1-20).
    pub roll: u32,
    pub modifier: i32,
    pub dc: i32,
    pub success: bool,
    /// Natural critical: always succeeds.
    pub critical: bool,
    /// Natural fumble: always fails.
    pub fumble: bool,
}

impl CheckOutcome {
    pub fn total(&self) -> i32 {
        self.roll as i32 + self.modifier
    }

    /// How far the total fell short of (negative) or exceeded the DC.
    pub fn margin(&self) -> i32 {
        self.total() - self.dc
    }
}

/// Resolves a check from an already-rolled die face.
///
/// Pure: the roll is an input so the check can be tested with fixed faces.
pub fn skill_check(roll: u32, modifier: i32, dc: i32, rules: &CheckRules) -> CheckOutcome {
    let critical = roll >= rules.critical_roll;
    let fumble = !critical && roll <= rules.fumble_roll;
    let success = critical || (!fumble && roll as i32 + modifier >= dc);

    CheckOutcome {
        roll,
        modifier,
        dc,
        success,
        critical,
        fumble,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeting_dc_succeeds() {
        let outcome = skill_check(7, 5, 12, &CheckRules::default());
        assert!(outcome.success);
        assert_eq!(outcome.margin(), 0);
    }

    #[test]
    fn falling_short_fails() {
        let outcome = skill_check(6, 5, 12, &CheckRules::default());
        assert!(!outcome.success);
        assert_eq!(outcome.margin(), -1);
    }

    #[test]
    fn natural_twenty_always_hits() {
        let outcome = skill_check(20, -10, 40, &CheckRules::default());
        assert!(outcome.success);
        assert!(outcome.critical);
    }

    #[test]
    fn natural_one_always_misses() {
        let outcome = skill_check(1, 30, 5, &CheckRules::default());
        assert!(!outcome.success);
        assert!(outcome.fumble);
    }
}
