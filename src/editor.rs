//! UI-facing surface of the style toggler.
//!
//! [`StyleEditor`] is what toolbar buttons and the history list talk to. It
//! builds commands from the current styles and routes every change through
//! its history, so the style record is never mutated any other way.

use tracing::debug;

use crate::commands::StyleCommand;
use crate::error::Result;
use crate::history::{
    HistoryConfig, HistoryEntry, HistoryEvent, JumpTarget, LinearCommandHistory,
};
use crate::style::Styles;
use crate::style_context::StyleContext;
use crate::traits::command_history::CommandHistory;

#[derive(Debug, Default)]
pub struct StyleEditor {
    context: StyleContext,
    history: LinearCommandHistory<StyleCommand>,
}

impl StyleEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_styles(styles: Styles) -> Self {
        Self {
            context: StyleContext::new(styles),
            history: LinearCommandHistory::new(),
        }
    }

    #[must_use]
    pub fn with_config(styles: Styles, config: HistoryConfig) -> Self {
        Self {
            context: StyleContext::new(styles),
            history: LinearCommandHistory::with_config(config),
        }
    }

    /// # Errors
    ///
    /// [`StyleError::ContextBusy`](crate::error::StyleError::ContextBusy) while a reader holds the context.
    pub fn toggle_italic(&mut self) -> Result<()> {
        let command = StyleCommand::italic(&self.context.snapshot());
        self.run(command)
    }

    /// # Errors
    ///
    /// [`StyleError::ContextBusy`](crate::error::StyleError::ContextBusy) while a reader holds the context.
    pub fn toggle_bold(&mut self) -> Result<()> {
        let command = StyleCommand::bold(&self.context.snapshot());
        self.run(command)
    }

    /// # Errors
    ///
    /// [`StyleError::ContextBusy`](crate::error::StyleError::ContextBusy) while a reader holds the context.
    pub fn toggle_underline(&mut self) -> Result<()> {
        let command = StyleCommand::underline(&self.context.snapshot());
        self.run(command)
    }

    fn run(&mut self, command: StyleCommand) -> Result<()> {
        debug!(?command, "toggle");
        self.history.execute_command(command, &self.context)
    }

    /// # Errors
    ///
    /// [`StyleError::ContextBusy`](crate::error::StyleError::ContextBusy) while a reader holds the context.
    pub fn undo(&mut self) -> Result<()> {
        self.history.undo(&self.context)
    }

    /// # Errors
    ///
    /// [`StyleError::ContextBusy`](crate::error::StyleError::ContextBusy) while a reader holds the context.
    pub fn redo(&mut self) -> Result<()> {
        self.history.redo(&self.context)
    }

    /// Moves to a history list entry, or to the initial state with `JumpTarget::Back(0)`.
    ///
    /// # Errors
    ///
    /// [`StyleError::ContextBusy`](crate::error::StyleError::ContextBusy) while a reader holds the context.
    pub fn jump(&mut self, target: JumpTarget) -> Result<()> {
        self.history.jump(target, &self.context)
    }

    #[must_use]
    pub fn entries(&self) -> Vec<HistoryEntry<'_>> {
        self.history.entries()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn styles(&self) -> Styles {
        self.context.snapshot()
    }

    /// CSS declarations for the renderer.
    #[must_use]
    pub fn css(&self) -> String {
        self.context.read().to_css()
    }

    /// A read-only handle for the renderer.
    #[must_use]
    pub fn context(&self) -> StyleContext {
        self.context.clone()
    }

    pub fn set_on_change<F>(&mut self, hook: F)
    where
        F: FnMut(&HistoryEvent) + 'static,
    {
        self.history.set_on_change(hook);
    }
}
