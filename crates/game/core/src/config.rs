/// Exact rational multiplier applied with floor semantics.
///
/// Every formula works on integers: `value × numerator / denominator` is
/// evaluated in 64-bit and floored, then saturated back into `i32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ratio {
    pub numerator: i32,
    pub denominator: i32,
}

impl Ratio {
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns `floor(value × self)`.
    pub fn apply_floor(self, value: i32) -> i32 {
        let scaled = i64::from(value) * i64::from(self.numerator);
        saturate(scaled.div_euclid(i64::from(self.denominator)))
    }

    /// Returns true when `value` is strictly below `whole × self`.
    pub fn is_below(self, value: i32, whole: i32) -> bool {
        let scaled = i64::from(value) * i64::from(self.denominator);
        scaled < i64::from(whole) * i64::from(self.numerator)
    }
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Combat tuning constants.
///
/// Formulas reference these instead of literals so the numbers that define the
/// balance live in one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatConfig;

impl CombatConfig {
    // ===== attack strategies =====
    /// Melee deals 120% of attack power.
    pub const MELEE_MULTIPLIER: Ratio = Ratio::new(6, 5);
    /// Mana consumed by every magic attack.
    pub const MAGIC_MANA_COST: i32 = 10;
    /// One bonus damage point per this much current mana.
    pub const MAGIC_MANA_BONUS_DIVISOR: i32 = 10;
    /// Ranged accuracy penalty: 80% of attack power.
    pub const RANGED_ACCURACY: Ratio = Ratio::new(4, 5);
    /// Targets strictly below this share of max health take critical hits.
    pub const CRITICAL_HEALTH_THRESHOLD: Ratio = Ratio::new(3, 10);
    /// Critical hits deal 150%.
    pub const CRITICAL_MULTIPLIER: Ratio = Ratio::new(3, 2);

    // ===== defense strategies =====
    /// Standard defense absorbs half the defense value.
    pub const STANDARD_DEFENSE_DIVISOR: i32 = 2;
    /// Heavy armor always lets at least 25% of incoming damage through.
    pub const HEAVY_ARMOR_MIN_DAMAGE: Ratio = Ratio::new(1, 4);

    // ===== turn sequences =====
    /// Power attacks add a quarter of attack power.
    pub const POWER_ATTACK_BONUS_DIVISOR: i32 = 4;
    /// Power attack recoil: 10% of the attacker's max health.
    pub const POWER_ATTACK_RECOIL: Ratio = Ratio::new(1, 10);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_floor_rounds_toward_negative_infinity() {
        assert_eq!(CombatConfig::MELEE_MULTIPLIER.apply_floor(40), 48);
        assert_eq!(CombatConfig::MELEE_MULTIPLIER.apply_floor(7), 8);
        assert_eq!(CombatConfig::HEAVY_ARMOR_MIN_DAMAGE.apply_floor(-5), -2);
    }

    #[test]
    fn apply_floor_saturates_instead_of_overflowing() {
        let saturated = CombatConfig::MELEE_MULTIPLIER.apply_floor(i32::MAX);
        assert_eq!(saturated, i32::MAX);
    }

    #[test]
    fn threshold_is_strict() {
        let threshold = CombatConfig::CRITICAL_HEALTH_THRESHOLD;
        assert!(!threshold.is_below(45, 150));
        assert!(threshold.is_below(44, 150));
    }
}
