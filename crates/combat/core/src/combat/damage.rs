//! Damage calculation.

use crate::config::DamageRules;

/// Calculate damage for a successful attack.
///
/// # Formula
///
/// ```text
/// scaled   = base × (100 + skill_level × scaling_percent_per_level) / 100
/// varied   = scaled + variance_offset        (offset ∈ [-variance, +variance])
/// critical = varied × critical_multiplier    (natural crit only)
/// final    = max(critical, 1)
/// ```
///
/// * `base` - weapon damage, or `rules.unarmed` without a weapon
/// * `skill_level` - attacker's level in the classified skill
/// * `variance_roll` - value in `[0, 2 × variance]`, centered by this function
pub fn calculate_damage(
    base: u32,
    skill_level: i32,
    variance_roll: u32,
    critical: bool,
    rules: &DamageRules,
) -> u32 {
    let scaling = 100 + skill_level.max(0) as i64 * rules.scaling_percent_per_level as i64;
    let scaled = base as i64 * scaling / 100;

    let variance = rules.variance as i64;
    let offset = (variance_roll as i64).min(2 * variance) - variance;
    let mut damage = scaled + offset;

    if critical {
        damage *= rules.critical_multiplier.max(1) as i64;
    }

    damage.clamp(1, u32::MAX as i64) as u32
}

/// Deterministic damage the caller applies when resolution fails.
pub fn fallback_damage(weapon_damage: Option<u32>, rules: &DamageRules) -> u32 {
    weapon_damage
        .map(|damage| damage / 2)
        .unwrap_or(0)
        .max(rules.fallback)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(variance: u32) -> DamageRules {
        DamageRules {
            variance,
            ..DamageRules::default()
        }
    }

    #[test]
    fn skill_scales_base_damage() {
        // 6 × 150% with centered variance
        assert_eq!(calculate_damage(6, 5, 1, false, &rules(1)), 9);
    }

    #[test]
    fn variance_is_bounded() {
        for roll in 0..10 {
            let damage = calculate_damage(10, 0, roll, false, &rules(2));
            assert!((8..=12).contains(&damage));
        }
    }

    #[test]
    fn damage_never_drops_below_one() {
        assert_eq!(calculate_damage(0, 0, 0, false, &rules(3)), 1);
    }

    #[test]
    fn critical_multiplies_after_variance() {
        assert_eq!(calculate_damage(4, 0, 0, true, &rules(0)), 8);
    }

    #[test]
    fn fallback_uses_half_weapon_or_configured_floor() {
        let rules = DamageRules::default();
        assert_eq!(fallback_damage(Some(8), &rules), 4);
        assert_eq!(fallback_damage(None, &rules), 1);

        let generous = DamageRules {
            fallback: 5,
            ..DamageRules::default()
        };
        assert_eq!(fallback_damage(Some(6), &generous), 5);
        assert_eq!(fallback_damage(Some(12), &generous), 6);
    }
}
