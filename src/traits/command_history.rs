use std::num::NonZeroUsize;

use tracing::debug;

use super::command::Command;

/// Linear undo/redo over commands of type `C`.
///
/// Jumps are built from single steps: each undo or redo completes, including its
/// effect on the context, before the next one starts.
pub trait CommandHistory<C: Command> {
    /// Applies `command`, records it as the newest undoable entry and discards the redo branch.
    ///
    /// # Errors
    ///
    /// Propagates the command's error; the history is left untouched.
    fn execute_command(&mut self, command: C, ctx: &C::Context) -> Result<(), C::Error>;

    /// Reverts the newest undoable command. Does nothing when there is none.
    ///
    /// # Errors
    ///
    /// Propagates the command's error; the command stays undoable.
    fn undo(&mut self, ctx: &C::Context) -> Result<(), C::Error>;

    /// Re-applies the most recently undone command. Does nothing when there is none.
    ///
    /// # Errors
    ///
    /// Propagates the command's error; the command stays redoable.
    fn redo(&mut self, ctx: &C::Context) -> Result<(), C::Error>;

    fn undo_len(&self) -> usize;
    fn redo_len(&self) -> usize;
    fn set_history_limit(&mut self, limit: NonZeroUsize);

    /// Undoes one step at a time until `index` undoable entries remain.
    ///
    /// An `index` at or past the current length leaves the history as it is.
    ///
    /// # Errors
    ///
    /// Stops at the first failing step. Steps completed before it stay applied.
    fn jump_back_to(&mut self, index: usize, ctx: &C::Context) -> Result<(), C::Error> {
        if self.undo_len() > index {
            debug!(from = self.undo_len(), to = index, "jumping back");
        }
        while self.undo_len() > index {
            self.undo(ctx)?;
        }
        Ok(())
    }

    /// Redoes one step at a time until `index` redoable entries remain.
    ///
    /// # Errors
    ///
    /// Stops at the first failing step. Steps completed before it stay applied.
    fn jump_forward_to(&mut self, index: usize, ctx: &C::Context) -> Result<(), C::Error> {
        if self.redo_len() > index {
            debug!(from = self.redo_len(), to = index, "jumping forward");
        }
        while self.redo_len() > index {
            self.redo(ctx)?;
        }
        Ok(())
    }

    /// Executes `commands` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing command; earlier ones stay recorded.
    fn batch_execute(&mut self, commands: Vec<C>, ctx: &C::Context) -> Result<(), C::Error> {
        for command in commands {
            self.execute_command(command, ctx)?;
        }
        Ok(())
    }
}
