use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

use crate::error::{Result, StyleError};
use crate::style::Styles;

/// A shared handle to the [`Styles`] a text block is rendered with.
///
/// Clones share the same underlying record. Readers such as a renderer get
/// read guards or snapshots; writes are reserved for style commands applied
/// through a history.
///
/// # Examples
///
/// ```
/// use style_history::prelude::*;
///
/// let context = StyleContext::new("font-weight: 700".parse().unwrap());
/// let renderer = context.clone();
///
/// let mut history = LinearCommandHistory::new();
/// let command = StyleCommand::bold(&context.snapshot());
/// history.execute_command(command, &context).unwrap();
///
/// assert_eq!(renderer.read().font_weight, Some(FontWeight::Normal));
/// ```
///
/// # Methods
///
/// * `new(styles: Styles) -> Self` - Creates a context holding `styles`.
/// * `read(&self) -> RwLockReadGuard<'_, Styles>` - Read access. Blocks only while a write is in progress.
/// * `try_read(&self) -> Option<RwLockReadGuard<'_, Styles>>` - Read access without blocking.
/// * `snapshot(&self) -> Styles` - Copies the current record out.
///
/// # Traits
///
/// * `Clone` - Clones share the same record.
/// * `From<Styles>` - Wraps an existing record.
/// * `Default` - Starts from the empty record.
/// * `Debug` - Prints the record, or `<locked>` while a write holds it.
pub struct StyleContext {
    inner: Arc<RwLock<Styles>>,
}

impl StyleContext {
    #[must_use]
    pub fn new(styles: Styles) -> Self {
        Self {
            inner: Arc::new(RwLock::new(styles)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Styles> {
        self.inner.read()
    }

    #[must_use]
    pub fn try_read(&self) -> Option<RwLockReadGuard<'_, Styles>> {
        self.inner.try_read()
    }

    #[must_use]
    pub fn snapshot(&self) -> Styles {
        *self.inner.read()
    }

    /// Mutates the record with `f`.
    ///
    /// Never blocks: on a single thread a live read guard would otherwise deadlock the write.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::ContextBusy`] while any guard is held; `f` is not called.
    pub(crate) fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Styles),
    {
        let mut styles = self.inner.try_write().ok_or(StyleError::ContextBusy)?;
        f(&mut styles);
        Ok(())
    }
}

impl Clone for StyleContext {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        Self::new(Styles::default())
    }
}

impl std::fmt::Debug for StyleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_read() {
            Some(styles) => write!(f, "StyleContext({:?})", *styles),
            None => write!(f, "StyleContext(<locked>)"),
        }
    }
}

impl From<Styles> for StyleContext {
    fn from(styles: Styles) -> Self {
        Self::new(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{FontStyle, TextDecoration};

    #[test]
    fn test_new() {
        let context = StyleContext::new(Styles::default());
        assert!(context.read().is_empty());
    }

    #[test]
    fn test_update() {
        let context = StyleContext::default();
        context
            .update(|styles| styles.font_style = Some(FontStyle::Italic))
            .unwrap();
        assert_eq!(context.read().font_style, Some(FontStyle::Italic));
    }

    #[test]
    fn test_clone_shares_record() {
        let context = StyleContext::default();
        let renderer = context.clone();
        context
            .update(|styles| styles.text_decoration = Some(TextDecoration::Underline))
            .unwrap();
        assert_eq!(
            renderer.snapshot().text_decoration,
            Some(TextDecoration::Underline)
        );
    }

    #[test]
    fn test_update_refused_while_read() {
        let context = StyleContext::default();
        let guard = context.read();

        let result = context.update(|styles| styles.font_style = Some(FontStyle::Italic));
        assert_eq!(result, Err(StyleError::ContextBusy));
        assert!(guard.is_empty());

        drop(guard);
        assert!(context
            .update(|styles| styles.font_style = Some(FontStyle::Italic))
            .is_ok());
    }

    #[test]
    fn test_try_read() {
        let context = StyleContext::default();
        let first = context.try_read();
        assert!(first.is_some());
        assert!(context.try_read().is_some(), "readers do not exclude each other");
    }

    #[test]
    fn test_from_styles() {
        let styles: Styles = "font-style: oblique".parse().unwrap();
        let context = StyleContext::from(styles);
        assert_eq!(context.snapshot(), styles);
    }

    #[test]
    fn test_debug() {
        let context = StyleContext::default();
        assert_eq!(
            format!("{context:?}"),
            "StyleContext(Styles { font_style: None, font_weight: None, text_decoration: None })"
        );
    }
}
