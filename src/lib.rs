#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::correctness)]
#![warn(clippy::complexity)]
#![warn(clippy::suspicious)]
#![warn(clippy::cargo)]

pub mod commands;
pub mod editor;
pub mod error;
pub mod history;
pub mod style;
pub mod style_context;
pub mod traits;

pub mod prelude {
    pub use crate::commands::StyleCommand;
    pub use crate::editor::StyleEditor;
    pub use crate::error::StyleError;
    pub use crate::history::{
        EntryKind, HistoryConfig, HistoryEntry, HistoryEvent, JumpTarget, LinearCommandHistory,
        Transition,
    };
    pub use crate::style::{FontStyle, FontWeight, Styles, TextDecoration};
    pub use crate::style_context::StyleContext;
    pub use crate::traits::command::Command;
    pub use crate::traits::command_history::CommandHistory;
}
