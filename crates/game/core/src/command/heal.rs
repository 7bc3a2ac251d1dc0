use crate::error::CombatError;
use crate::roster::{ActorId, Roster};

use super::GameCommand;

/// Heals a character, remembering how much health was actually restored.
///
/// Undo subtracts only the healing that took effect (overheal is capped), so
/// reverting always lands on the pre-heal health.
#[derive(Clone, Debug)]
pub struct HealCommand {
    target: ActorId,
    target_name: String,
    amount: i32,
    actual_healing_done: Option<i32>,
}

impl HealCommand {
    pub fn new(roster: &Roster, target: ActorId, amount: i32) -> Result<Self, CombatError> {
        Ok(Self {
            target,
            target_name: roster.get(target)?.name().to_owned(),
            amount,
            actual_healing_done: None,
        })
    }

    pub fn target(&self) -> ActorId {
        self.target
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    /// Health actually restored by the last execute, if the effect is applied.
    pub fn actual_healing_done(&self) -> Option<i32> {
        self.actual_healing_done
    }
}

impl GameCommand for HealCommand {
    fn execute(&mut self, roster: &mut Roster) -> Result<(), CombatError> {
        if self.actual_healing_done.is_some() {
            return Err(CombatError::AlreadyExecuted);
        }

        let target = roster.get_mut(self.target)?;
        let before = target.stats().health();
        target.heal(self.amount);
        let after = target.stats().health();

        self.actual_healing_done = Some(after - before);
        Ok(())
    }

    fn undo(&mut self, roster: &mut Roster) -> Result<(), CombatError> {
        let target = roster.get_mut(self.target)?;
        let healed = self
            .actual_healing_done
            .take()
            .ok_or(CombatError::NotExecuted)?;
        let current = target.stats().health();
        target.set_health(current.saturating_sub(healed));
        Ok(())
    }

    fn description(&self) -> String {
        format!("Heal {} for {} HP", self.target_name, self.amount)
    }

    fn is_executed(&self) -> bool {
        self.actual_healing_done.is_some()
    }
}
