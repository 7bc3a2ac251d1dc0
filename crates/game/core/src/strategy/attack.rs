use crate::character::Character;
use crate::config::CombatConfig;
use crate::error::CombatError;

use super::AttackStrategy;

/// Close-range attack with a 20% bonus.
///
/// Formula: `floor(attack_power × 1.2)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeleeAttack;

impl AttackStrategy for MeleeAttack {
    fn name(&self) -> &'static str {
        "melee"
    }

    fn calculate_damage(
        &self,
        attacker: &mut Character,
        _target: &Character,
    ) -> Result<i32, CombatError> {
        Ok(CombatConfig::MELEE_MULTIPLIER.apply_floor(attacker.stats().attack_power()))
    }
}

/// Spell attack amplified by the caster's current mana.
///
/// Formula: `attack_power + floor(mana / 10)`, computed before the fixed
/// mana cost is paid. Fails without side effects when the cost cannot be paid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MagicAttack;

impl AttackStrategy for MagicAttack {
    fn name(&self) -> &'static str {
        "magic"
    }

    fn calculate_damage(
        &self,
        attacker: &mut Character,
        _target: &Character,
    ) -> Result<i32, CombatError> {
        let stats = attacker.stats();
        let mana_bonus = stats.mana() / CombatConfig::MAGIC_MANA_BONUS_DIVISOR;
        let damage = stats.attack_power().saturating_add(mana_bonus);

        if let Err(error) = attacker.use_mana(CombatConfig::MAGIC_MANA_COST) {
            tracing::debug!(caster = attacker.name(), %error, "magic attack fizzled");
            return Err(error);
        }

        Ok(damage)
    }
}

/// Ranged attack with an accuracy penalty and a finishing critical.
///
/// Formula: `floor(attack_power × 0.8)`, then `floor(· × 1.5)` when the
/// target's health is strictly below 30% of its maximum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangedAttack;

impl AttackStrategy for RangedAttack {
    fn name(&self) -> &'static str {
        "ranged"
    }

    fn calculate_damage(
        &self,
        attacker: &mut Character,
        target: &Character,
    ) -> Result<i32, CombatError> {
        let damage = CombatConfig::RANGED_ACCURACY.apply_floor(attacker.stats().attack_power());

        let target_stats = target.stats();
        let critical = CombatConfig::CRITICAL_HEALTH_THRESHOLD
            .is_below(target_stats.health(), target_stats.max_health());

        if critical {
            Ok(CombatConfig::CRITICAL_MULTIPLIER.apply_floor(damage))
        } else {
            Ok(damage)
        }
    }
}
