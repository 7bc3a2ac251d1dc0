use crate::error::CombatError;

use super::{BattleSequence, Turn};

/// Plain exchange: attacker strikes, defender absorbs. No extra steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardBattleSequence;

impl BattleSequence for StandardBattleSequence {
    fn perform_attack(&mut self, turn: &mut Turn<'_>) -> Result<(), CombatError> {
        turn.strike(0)?;
        Ok(())
    }
}
