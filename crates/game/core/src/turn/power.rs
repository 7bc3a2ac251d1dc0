use crate::config::CombatConfig;
use crate::error::CombatError;

use super::{BattleSequence, Turn};

/// Charged attack: extra damage up front, recoil afterwards.
///
/// - pre-attack: bonus = `floor(attack_power / 4)`
/// - attack: raw damage + bonus, through the defender's defense
/// - post-attack: attacker loses `floor(max_health × 0.1)`, bypassing defense
///   and never dropping below zero
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PowerAttackSequence {
    damage_bonus: i32,
}

impl PowerAttackSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bonus computed by the last pre-attack step.
    pub fn damage_bonus(&self) -> i32 {
        self.damage_bonus
    }
}

impl BattleSequence for PowerAttackSequence {
    fn pre_attack_action(&mut self, turn: &mut Turn<'_>) -> Result<(), CombatError> {
        self.damage_bonus =
            turn.attacker.stats().attack_power() / CombatConfig::POWER_ATTACK_BONUS_DIVISOR;
        Ok(())
    }

    fn perform_attack(&mut self, turn: &mut Turn<'_>) -> Result<(), CombatError> {
        turn.strike(self.damage_bonus)?;
        Ok(())
    }

    fn post_attack_action(&mut self, turn: &mut Turn<'_>) -> Result<(), CombatError> {
        let stats = turn.attacker.stats();
        let recoil = CombatConfig::POWER_ATTACK_RECOIL.apply_floor(stats.max_health());
        turn.attacker.set_health(stats.health().saturating_sub(recoil));
        Ok(())
    }
}
