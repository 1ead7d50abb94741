//! Toggle commands for the three style attributes.
//!
//! Each command reads the attribute once when it is built and decides its
//! target then. Executing it twice re-applies the same target; undoing it
//! restores exactly the value it saw, including "unset".

use std::borrow::Cow;

use crate::error::StyleError;
use crate::style::{FontStyle, FontWeight, Styles, TextDecoration};
use crate::style_context::StyleContext;
use crate::traits::command::Command;

/// A reversible style toggle carrying the attribute value captured at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleCommand {
    Italic { previous: Option<FontStyle> },
    Bold { previous: Option<FontWeight> },
    Underline { previous: Option<TextDecoration> },
}

impl StyleCommand {
    #[must_use]
    pub fn italic(styles: &Styles) -> Self {
        Self::Italic {
            previous: styles.font_style,
        }
    }

    #[must_use]
    pub fn bold(styles: &Styles) -> Self {
        Self::Bold {
            previous: styles.font_weight,
        }
    }

    #[must_use]
    pub fn underline(styles: &Styles) -> Self {
        Self::Underline {
            previous: styles.text_decoration,
        }
    }

    fn next_font_style(previous: Option<FontStyle>) -> FontStyle {
        if previous == Some(FontStyle::Italic) {
            FontStyle::Normal
        } else {
            FontStyle::Italic
        }
    }

    fn next_font_weight(previous: Option<FontWeight>) -> FontWeight {
        if previous.is_some_and(FontWeight::is_bold) {
            FontWeight::Normal
        } else {
            FontWeight::Bold
        }
    }

    fn next_text_decoration(previous: Option<TextDecoration>) -> TextDecoration {
        if previous == Some(TextDecoration::Underline) {
            TextDecoration::Unset
        } else {
            TextDecoration::Underline
        }
    }

    /// Writes the target value into `styles`.
    fn apply(self, styles: &mut Styles) {
        match self {
            Self::Italic { previous } => {
                styles.font_style = Some(Self::next_font_style(previous));
            }
            Self::Bold { previous } => {
                styles.font_weight = Some(Self::next_font_weight(previous));
            }
            Self::Underline { previous } => {
                styles.text_decoration = Some(Self::next_text_decoration(previous));
            }
        }
    }

    /// Writes the captured value back into `styles`.
    fn revert(self, styles: &mut Styles) {
        match self {
            Self::Italic { previous } => styles.font_style = previous,
            Self::Bold { previous } => styles.font_weight = previous,
            Self::Underline { previous } => styles.text_decoration = previous,
        }
    }
}

impl Command for StyleCommand {
    type Context = StyleContext;
    type Error = StyleError;

    fn execute(&self, ctx: &Self::Context) -> Result<(), Self::Error> {
        ctx.update(|styles| self.apply(styles))
    }

    fn undo(&self, ctx: &Self::Context) -> Result<(), Self::Error> {
        ctx.update(|styles| self.revert(styles))
    }

    fn description(&self) -> Cow<'_, str> {
        let label = match *self {
            Self::Italic { previous } => {
                format!("Italic command: change into {}", Self::next_font_style(previous))
            }
            Self::Bold { previous } => {
                format!("Bold command: change into {}", Self::next_font_weight(previous))
            }
            Self::Underline { previous } => format!(
                "Underline command: change into {}",
                Self::next_text_decoration(previous)
            ),
        };
        Cow::Owned(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(css: &str) -> StyleContext {
        StyleContext::new(css.parse().unwrap())
    }

    #[test]
    fn test_italic_from_unset() {
        let ctx = StyleContext::default();
        let command = StyleCommand::italic(&ctx.snapshot());

        command.execute(&ctx).unwrap();
        assert_eq!(ctx.snapshot().font_style, Some(FontStyle::Italic));

        command.undo(&ctx).unwrap();
        assert!(ctx.snapshot().is_empty());
    }

    #[test]
    fn test_italic_from_italic() {
        let ctx = context("font-style: italic");
        let command = StyleCommand::italic(&ctx.snapshot());

        command.execute(&ctx).unwrap();
        assert_eq!(ctx.snapshot().font_style, Some(FontStyle::Normal));
    }

    #[test]
    fn test_oblique_is_not_italic() {
        let ctx = context("font-style: oblique");
        let command = StyleCommand::italic(&ctx.snapshot());

        command.execute(&ctx).unwrap();
        assert_eq!(ctx.snapshot().font_style, Some(FontStyle::Italic));
        command.undo(&ctx).unwrap();
        assert_eq!(ctx.snapshot().font_style, Some(FontStyle::Oblique));
    }

    #[test]
    fn test_bold_numeric_weight() {
        let ctx = context("font-weight: 700");
        let command = StyleCommand::bold(&ctx.snapshot());

        command.execute(&ctx).unwrap();
        assert_eq!(ctx.snapshot().font_weight, Some(FontWeight::Normal));

        command.undo(&ctx).unwrap();
        assert_eq!(ctx.snapshot().font_weight, Some(FontWeight::Numeric(700)));
    }

    #[test]
    fn test_bold_light_weight() {
        let ctx = context("font-weight: 400");
        StyleCommand::bold(&ctx.snapshot()).execute(&ctx).unwrap();
        assert_eq!(ctx.snapshot().font_weight, Some(FontWeight::Bold));

        let ctx = context("font-weight: bolder");
        StyleCommand::bold(&ctx.snapshot()).execute(&ctx).unwrap();
        assert_eq!(ctx.snapshot().font_weight, Some(FontWeight::Bold));
    }

    #[test]
    fn test_underline_toggle() {
        let ctx = StyleContext::default();
        StyleCommand::underline(&ctx.snapshot())
            .execute(&ctx)
            .unwrap();
        assert_eq!(
            ctx.snapshot().text_decoration,
            Some(TextDecoration::Underline)
        );

        StyleCommand::underline(&ctx.snapshot())
            .execute(&ctx)
            .unwrap();
        assert_eq!(ctx.snapshot().text_decoration, Some(TextDecoration::Unset));
    }

    #[test]
    fn test_execute_twice_reapplies_target() {
        let ctx = StyleContext::default();
        let command = StyleCommand::italic(&ctx.snapshot());

        command.execute(&ctx).unwrap();
        command.execute(&ctx).unwrap();
        assert_eq!(ctx.snapshot().font_style, Some(FontStyle::Italic));
    }

    #[test]
    fn test_only_touches_own_attribute() {
        let ctx = context("font-style: italic; text-decoration: underline");
        let command = StyleCommand::bold(&ctx.snapshot());

        command.execute(&ctx).unwrap();
        let styles = ctx.snapshot();
        assert_eq!(styles.font_style, Some(FontStyle::Italic));
        assert_eq!(styles.font_weight, Some(FontWeight::Bold));
        assert_eq!(styles.text_decoration, Some(TextDecoration::Underline));
    }

    #[test]
    fn test_description() {
        let empty = Styles::default();
        assert_eq!(
            StyleCommand::italic(&empty).description(),
            "Italic command: change into italic"
        );
        assert_eq!(
            StyleCommand::bold(&"font-weight: 800".parse().unwrap()).description(),
            "Bold command: change into normal"
        );
        assert_eq!(
            StyleCommand::underline(&"text-decoration: underline".parse().unwrap())
                .description(),
            "Underline command: change into unset"
        );
    }

    #[test]
    fn test_description_is_stable() {
        let ctx = StyleContext::default();
        let command = StyleCommand::italic(&ctx.snapshot());
        let before = command.description().into_owned();

        command.execute(&ctx).unwrap();
        assert_eq!(command.description(), before);
    }

    #[test]
    fn test_busy_context() {
        let ctx = StyleContext::default();
        let command = StyleCommand::italic(&ctx.snapshot());
        let guard = ctx.read();

        assert_eq!(command.execute(&ctx), Err(StyleError::ContextBusy));
        drop(guard);
        assert!(ctx.snapshot().is_empty());
    }
}
