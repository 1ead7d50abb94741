//! Error types for style values and style context mutation.

use thiserror::Error;

/// Errors raised while parsing style declarations or mutating a [`StyleContext`].
///
/// [`StyleContext`]: crate::style_context::StyleContext
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The context is held by a reader, so the write was refused instead of blocking.
    #[error("style context is currently borrowed by a reader")]
    ContextBusy,

    /// A declaration named a property this crate does not model.
    #[error("unknown style property: {0}")]
    UnknownProperty(String),

    /// A declaration carried a value the property does not accept.
    #[error("invalid value '{value}' for {property}")]
    InvalidValue {
        /// The CSS property name.
        property: &'static str,
        /// The rejected value as written.
        value: String,
    },
}

/// Result type for style operations.
pub type Result<T> = std::result::Result<T, StyleError>;
