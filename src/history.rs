use std::{borrow::Cow, collections::VecDeque, fmt, num::NonZeroUsize};

use tracing::{debug, trace};

use crate::traits::{command::Command, command_history::CommandHistory};

/// Settings for a [`LinearCommandHistory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of entries kept per stack. `None` keeps everything.
    pub history_limit: Option<NonZeroUsize>,
}

/// Which stack transition just happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Executed,
    Undone,
    Redone,
    Cleared,
    Trimmed,
}

/// Passed to the on-change hook after every successful stack transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEvent {
    pub transition: Transition,
    pub undo_len: usize,
    pub redo_len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Applied; selecting it undoes everything after it.
    Undo,
    /// Undone; selecting it redoes up to and including it.
    Redo,
}

/// Where selecting a history entry takes the history.
///
/// `Back(0)` is the initial state, before any recorded command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpTarget {
    /// Keep this many undoable entries.
    Back(usize),
    /// Keep this many redoable entries.
    Forward(usize),
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry<'a> {
    pub kind: EntryKind,
    pub label: Cow<'a, str>,
    pub target: JumpTarget,
}

type ChangeHook = Box<dyn FnMut(&HistoryEvent)>;

/// Single-threaded linear undo/redo history.
///
/// `undo` holds applied commands oldest first. `redo` holds undone commands
/// with the next one to redo at the back. A command is always owned by
/// exactly one of the two, and executing a new command drops the whole redo
/// branch.
pub struct LinearCommandHistory<C: Command> {
    undo: VecDeque<C>,
    redo: VecDeque<C>,
    history_limit: Option<NonZeroUsize>,
    on_change: Option<ChangeHook>,
}

impl<C: Command> LinearCommandHistory<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    #[must_use]
    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: VecDeque::new(),
            history_limit: config.history_limit,
            on_change: None,
        }
    }

    /// Registers `hook`, replacing any previous one. It runs after each
    /// completed transition, once per step during a jump.
    pub fn set_on_change<F>(&mut self, hook: F)
    where
        F: FnMut(&HistoryEvent) + 'static,
    {
        self.on_change = Some(Box::new(hook));
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Applied commands, oldest first.
    #[must_use]
    pub fn undo_history(&self) -> Option<Vec<&C>> {
        if self.undo.is_empty() {
            None
        } else {
            Some(self.undo.iter().collect())
        }
    }

    /// Undone commands, next to redo first.
    #[must_use]
    pub fn redo_history(&self) -> Option<Vec<&C>> {
        if self.redo.is_empty() {
            None
        } else {
            Some(self.redo.iter().rev().collect())
        }
    }

    /// Lists applied commands oldest first, then undone commands next-to-redo first.
    ///
    /// Each entry's target restores the state right after its command was applied.
    #[must_use]
    pub fn entries(&self) -> Vec<HistoryEntry<'_>> {
        let redo_len = self.redo.len();
        let applied = self
            .undo
            .iter()
            .enumerate()
            .map(|(position, command)| HistoryEntry {
                kind: EntryKind::Undo,
                label: command.description(),
                target: JumpTarget::Back(position + 1),
            });
        let undone = self
            .redo
            .iter()
            .rev()
            .enumerate()
            .map(|(position, command)| HistoryEntry {
                kind: EntryKind::Redo,
                label: command.description(),
                target: JumpTarget::Forward(redo_len - position - 1),
            });
        applied.chain(undone).collect()
    }

    /// Moves to `target` one step at a time.
    ///
    /// # Errors
    ///
    /// Stops at the first failing step and returns its error.
    pub fn jump(&mut self, target: JumpTarget, ctx: &C::Context) -> Result<(), C::Error> {
        match target {
            JumpTarget::Back(index) => self.jump_back_to(index, ctx),
            JumpTarget::Forward(index) => self.jump_forward_to(index, ctx),
        }
    }

    /// Drops every recorded command. The context is left as it is.
    pub fn clear(&mut self) {
        if self.undo.is_empty() && self.redo.is_empty() {
            return;
        }
        self.undo.clear();
        self.redo.clear();
        self.notify(Transition::Cleared);
    }

    fn push_undo(&mut self, command: C) {
        if let Some(limit) = self.history_limit {
            while self.undo.len() >= limit.get() {
                self.undo.pop_front();
            }
        }

        self.undo.push_back(command);
    }

    fn push_redo(&mut self, command: C) {
        if let Some(limit) = self.history_limit {
            while self.redo.len() >= limit.get() {
                self.redo.pop_front();
            }
        }

        self.redo.push_back(command);
    }

    fn notify(&mut self, transition: Transition) {
        let event = HistoryEvent {
            transition,
            undo_len: self.undo.len(),
            redo_len: self.redo.len(),
        };
        if let Some(hook) = self.on_change.as_mut() {
            hook(&event);
        }
    }
}

impl<C: Command> Default for LinearCommandHistory<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Command> fmt::Debug for LinearCommandHistory<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearCommandHistory")
            .field("undo_len", &self.undo.len())
            .field("redo_len", &self.redo.len())
            .field("history_limit", &self.history_limit)
            .finish_non_exhaustive()
    }
}

impl<C: Command> CommandHistory<C> for LinearCommandHistory<C> {
    fn execute_command(&mut self, command: C, ctx: &C::Context) -> Result<(), C::Error> {
        if let Err(error) = command.execute(ctx) {
            debug!(command = %command.description(), "execute failed");
            return Err(error);
        }
        trace!(
            command = %command.description(),
            undo_len = self.undo.len() + 1,
            "command executed"
        );

        self.push_undo(command);

        if !self.redo.is_empty() {
            trace!(cleared = self.redo.len(), "redo stack cleared");
        }
        self.redo.clear();
        self.notify(Transition::Executed);
        Ok(())
    }

    fn undo(&mut self, ctx: &C::Context) -> Result<(), C::Error> {
        let Some(command) = self.undo.back() else {
            trace!("nothing to undo");
            return Ok(());
        };
        if let Err(error) = command.undo(ctx) {
            debug!(command = %command.description(), "undo failed");
            return Err(error);
        }

        if let Some(command) = self.undo.pop_back() {
            trace!(
                command = %command.description(),
                undo_len = self.undo.len(),
                redo_len = self.redo.len() + 1,
                "command undone"
            );
            self.push_redo(command);
            self.notify(Transition::Undone);
        }
        Ok(())
    }

    fn redo(&mut self, ctx: &C::Context) -> Result<(), C::Error> {
        let Some(command) = self.redo.back() else {
            trace!("nothing to redo");
            return Ok(());
        };
        if let Err(error) = command.redo(ctx) {
            debug!(command = %command.description(), "redo failed");
            return Err(error);
        }

        if let Some(command) = self.redo.pop_back() {
            trace!(
                command = %command.description(),
                undo_len = self.undo.len() + 1,
                redo_len = self.redo.len(),
                "command redone"
            );
            self.push_undo(command);
            self.notify(Transition::Redone);
        }
        Ok(())
    }

    fn undo_len(&self) -> usize {
        self.undo.len()
    }

    fn redo_len(&self) -> usize {
        self.redo.len()
    }

    fn set_history_limit(&mut self, limit: NonZeroUsize) {
        self.history_limit = Some(limit);
        let before = self.undo.len() + self.redo.len();

        while self.undo.len() > limit.get() {
            self.undo.pop_front();
        }

        while self.redo.len() > limit.get() {
            self.redo.pop_front();
        }

        let dropped = before - self.undo.len() - self.redo.len();
        if dropped > 0 {
            trace!(dropped, "history trimmed to limit");
            self.notify(Transition::Trimmed);
        }
    }
}
