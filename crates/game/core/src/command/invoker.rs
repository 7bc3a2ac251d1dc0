use std::fmt;

use crate::error::CombatError;
use crate::roster::Roster;

use super::GameCommand;

/// Executes commands and keeps a last-in-first-out history for undo.
///
/// A command enters history only after its `execute` succeeds, so a
/// half-applied action can never be undone. Undo pops the most recent entry
/// before reverting it; an undo failure propagates and the entry stays popped.
#[derive(Default)]
pub struct CommandInvoker {
    history: Vec<Box<dyn GameCommand>>,
}

impl CommandInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes `command` against `roster` and records it on success.
    pub fn execute<C>(&mut self, command: C, roster: &mut Roster) -> Result<(), CombatError>
    where
        C: GameCommand + 'static,
    {
        self.execute_boxed(Box::new(command), roster)
    }

    /// Boxed variant of [`execute`](Self::execute) for heterogeneous callers.
    pub fn execute_boxed(
        &mut self,
        mut command: Box<dyn GameCommand>,
        roster: &mut Roster,
    ) -> Result<(), CombatError> {
        if let Err(error) = command.execute(roster) {
            tracing::debug!(command = %command.description(), %error, "command rejected");
            return Err(error);
        }

        tracing::debug!(
            command = %command.description(),
            depth = self.history.len() + 1,
            "command executed"
        );
        self.history.push(command);
        Ok(())
    }

    /// Reverts the most recent command.
    ///
    /// Returns `Ok(None)` when history is empty. Otherwise returns the undone
    /// command, which is no longer part of history.
    pub fn undo(
        &mut self,
        roster: &mut Roster,
    ) -> Result<Option<Box<dyn GameCommand>>, CombatError> {
        let Some(mut command) = self.history.pop() else {
            tracing::trace!("undo requested with empty history");
            return Ok(None);
        };

        command.undo(roster)?;
        tracing::debug!(
            command = %command.description(),
            depth = self.history.len(),
            "command undone"
        );
        Ok(Some(command))
    }

    /// Drops all history without reverting anything.
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.history.len(), "history cleared");
        self.history.clear();
    }

    /// Executed commands, oldest first.
    pub fn history(&self) -> &[Box<dyn GameCommand>] {
        &self.history
    }

    /// Descriptions of executed commands, oldest first.
    pub fn descriptions(&self) -> impl Iterator<Item = String> + '_ {
        self.history.iter().map(|command| command.description())
    }

    pub fn has_commands_to_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl fmt::Debug for CommandInvoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandInvoker")
            .field("history", &self.descriptions().collect::<Vec<_>>())
            .finish()
    }
}
