//! Reversible combat actions.
//!
//! A command binds to roster handles when it is created and captures, while
//! executing, exactly what it needs to revert its own effect. The
//! [`CommandInvoker`] alone decides when commands enter and leave history.
//!
//! Commands move through `pending → executed → pending`: executing an executed
//! command or undoing a pending one fails instead of applying twice.

mod attack;
mod heal;
mod invoker;

pub use attack::AttackCommand;
pub use heal::HealCommand;
pub use invoker::CommandInvoker;

use crate::error::CombatError;
use crate::roster::Roster;

/// An encapsulated action that can be applied to and reverted from a roster.
pub trait GameCommand {
    /// Applies the action. On error the roster is left unchanged.
    fn execute(&mut self, roster: &mut Roster) -> Result<(), CombatError>;

    /// Reverts the effect captured by the last successful [`execute`](Self::execute).
    fn undo(&mut self, roster: &mut Roster) -> Result<(), CombatError>;

    /// Human-readable summary for logs; has no effect on execute/undo.
    fn description(&self) -> String;

    /// Whether the command currently has an applied effect to revert.
    fn is_executed(&self) -> bool;
}
