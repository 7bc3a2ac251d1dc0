use crate::character::Character;
use crate::config::CombatConfig;

use super::DefenseStrategy;

/// Absorbs half the defense value.
///
/// Formula: `max(0, incoming − floor(defense / 2))`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardDefense;

impl DefenseStrategy for StandardDefense {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn mitigate(&self, defender: &Character, incoming: i32) -> i32 {
        let reduction = defender.stats().defense() / CombatConfig::STANDARD_DEFENSE_DIVISOR;
        incoming.saturating_sub(reduction).max(0)
    }
}

/// Absorbs the full defense value, capped at 75% of the incoming damage.
///
/// Formula: `max(incoming − defense, floor(incoming × 0.25))`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeavyArmorDefense;

impl DefenseStrategy for HeavyArmorDefense {
    fn name(&self) -> &'static str {
        "heavy_armor"
    }

    fn mitigate(&self, defender: &Character, incoming: i32) -> i32 {
        let naive = incoming.saturating_sub(defender.stats().defense());
        let minimum = CombatConfig::HEAVY_ARMOR_MIN_DAMAGE.apply_floor(incoming);
        naive.max(minimum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Archetype;
    use crate::stats::Stats;
    use crate::strategy::MeleeAttack;

    fn defender(defense: i32, strategy: impl DefenseStrategy + 'static) -> Character {
        Character::builder()
            .name("Wall")
            .archetype(Archetype::Warrior)
            .stats(Stats::full(150, 0, defense, 0).unwrap())
            .attack_strategy(MeleeAttack)
            .defense_strategy(strategy)
            .build()
            .unwrap()
    }

    #[test]
    fn standard_subtracts_half_defense() {
        let mage = defender(10, StandardDefense);
        assert_eq!(mage.defend(48), 43);

        let odd = defender(15, StandardDefense);
        assert_eq!(odd.defend(40), 33);
    }

    #[test]
    fn standard_never_goes_negative() {
        let wall = defender(200, StandardDefense);
        assert_eq!(wall.defend(5), 0);
        assert_eq!(wall.defend(0), 0);
    }

    #[test]
    fn heavy_armor_subtracts_full_defense() {
        assert_eq!(defender(30, HeavyArmorDefense).defend(100), 70);
    }

    #[test]
    fn heavy_armor_caps_absorption_at_75_percent() {
        assert_eq!(defender(80, HeavyArmorDefense).defend(100), 25);
        assert_eq!(defender(30, HeavyArmorDefense).defend(1000), 970);
        assert_eq!(defender(30, HeavyArmorDefense).defend(5), 1);
        assert_eq!(defender(30, HeavyArmorDefense).defend(3), 0);
    }

    #[test]
    fn heavy_armor_handles_extreme_defense() {
        let fortress = defender(i32::MAX, HeavyArmorDefense);
        assert_eq!(fortress.defend(1000), 250);
    }
}
