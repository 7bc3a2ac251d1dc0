use crate::error::CombatError;
use crate::roster::{ActorId, Roster};

use super::GameCommand;

/// One character attacks another (or itself).
///
/// Execute records the raw damage returned by the attacker's strategy; undo
/// heals the target by that same amount. Because defense and clamping sit
/// between the two, undo restores the prior health exactly only when the
/// healed amount is capped back to where the target started (e.g. a target at
/// full health). Mana spent by the attacker is not refunded.
#[derive(Clone, Debug)]
pub struct AttackCommand {
    attacker: ActorId,
    target: ActorId,
    attacker_name: String,
    target_name: String,
    damage_dealt: Option<i32>,
}

impl AttackCommand {
    /// Binds the command to two roster entries, which must exist.
    pub fn new(roster: &Roster, attacker: ActorId, target: ActorId) -> Result<Self, CombatError> {
        Ok(Self {
            attacker,
            target,
            attacker_name: roster.get(attacker)?.name().to_owned(),
            target_name: roster.get(target)?.name().to_owned(),
            damage_dealt: None,
        })
    }

    pub fn attacker(&self) -> ActorId {
        self.attacker
    }

    pub fn target(&self) -> ActorId {
        self.target
    }

    /// Raw damage recorded by the last execute, if the effect is applied.
    pub fn damage_dealt(&self) -> Option<i32> {
        self.damage_dealt
    }
}

impl GameCommand for AttackCommand {
    fn execute(&mut self, roster: &mut Roster) -> Result<(), CombatError> {
        if self.damage_dealt.is_some() {
            return Err(CombatError::AlreadyExecuted);
        }

        // Snapshot so an actor can target itself without aliasing borrows.
        let target_view = roster.get(self.target)?.clone();
        let damage = roster.get_mut(self.attacker)?.attack(&target_view)?;
        roster.get_mut(self.target)?.take_damage(damage);

        self.damage_dealt = Some(damage);
        Ok(())
    }

    fn undo(&mut self, roster: &mut Roster) -> Result<(), CombatError> {
        let target = roster.get_mut(self.target)?;
        let damage = self.damage_dealt.take().ok_or(CombatError::NotExecuted)?;
        target.heal(damage);
        Ok(())
    }

    fn description(&self) -> String {
        format!("{} attacks {}", self.attacker_name, self.target_name)
    }

    fn is_executed(&self) -> bool {
        self.damage_dealt.is_some()
    }
}
