//! Typed text style attributes and their CSS text form.

use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// Value of the `font-style` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

/// Value of the `font-weight` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Normal,
    Bold,
    Bolder,
    Lighter,
    Numeric(u16),
}

impl FontWeight {
    /// Weight from which a numeric value renders as bold.
    pub const BOLD_THRESHOLD: u16 = 700;

    /// Returns `true` for `bold` and for numeric weights of at least 700.
    ///
    /// `bolder` is relative to the parent weight and does not count.
    #[must_use]
    pub fn is_bold(self) -> bool {
        match self {
            Self::Bold => true,
            Self::Numeric(weight) => weight >= Self::BOLD_THRESHOLD,
            Self::Normal | Self::Bolder | Self::Lighter => false,
        }
    }
}

/// Value of the `text-decoration` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDecoration {
    None,
    Underline,
    Overline,
    LineThrough,
    Unset,
}

/// The style record a text block is rendered with. Unset attributes are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Styles {
    pub font_style: Option<FontStyle>,
    pub font_weight: Option<FontWeight>,
    pub text_decoration: Option<TextDecoration>,
}

impl Styles {
    /// Renders the set attributes as CSS declarations, e.g.
    /// `font-style: italic; font-weight: bold`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut declarations = Vec::with_capacity(3);
        if let Some(value) = self.font_style {
            declarations.push(format!("font-style: {value}"));
        }
        if let Some(value) = self.font_weight {
            declarations.push(format!("font-weight: {value}"));
        }
        if let Some(value) = self.text_decoration {
            declarations.push(format!("text-decoration: {value}"));
        }
        declarations.join("; ")
    }

    /// Returns `true` if no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.font_style.is_none() && self.font_weight.is_none() && self.text_decoration.is_none()
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        })
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Bold => f.write_str("bold"),
            Self::Bolder => f.write_str("bolder"),
            Self::Lighter => f.write_str("lighter"),
            Self::Numeric(weight) => write!(f, "{weight}"),
        }
    }
}

impl fmt::Display for TextDecoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Underline => "underline",
            Self::Overline => "overline",
            Self::LineThrough => "line-through",
            Self::Unset => "unset",
        })
    }
}

fn invalid(property: &'static str, value: &str) -> StyleError {
    StyleError::InvalidValue {
        property,
        value: value.to_owned(),
    }
}

impl FromStr for FontStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(Self::Normal),
            "italic" => Ok(Self::Italic),
            "oblique" => Ok(Self::Oblique),
            other => Err(invalid("font-style", other)),
        }
    }
}

impl FromStr for FontWeight {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(Self::Normal),
            "bold" => Ok(Self::Bold),
            "bolder" => Ok(Self::Bolder),
            "lighter" => Ok(Self::Lighter),
            other => other
                .parse::<u16>()
                .map(Self::Numeric)
                .map_err(|_| invalid("font-weight", other)),
        }
    }
}

impl FromStr for TextDecoration {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" => Ok(Self::None),
            "underline" => Ok(Self::Underline),
            "overline" => Ok(Self::Overline),
            "line-through" => Ok(Self::LineThrough),
            "unset" => Ok(Self::Unset),
            other => Err(invalid("text-decoration", other)),
        }
    }
}

/// Parses `property: value` declarations separated by `;`.
///
/// Empty declarations are skipped and later declarations win.
impl FromStr for Styles {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut styles = Self::default();
        for declaration in s.split(';').map(str::trim).filter(|d| !d.is_empty()) {
            let (property, value) = declaration
                .split_once(':')
                .ok_or_else(|| StyleError::UnknownProperty(declaration.to_owned()))?;
            match property.trim() {
                "font-style" => styles.font_style = Some(value.parse()?),
                "font-weight" => styles.font_weight = Some(value.parse()?),
                "text-decoration" => styles.text_decoration = Some(value.parse()?),
                other => return Err(StyleError::UnknownProperty(other.to_owned())),
            }
        }
        Ok(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bold() {
        assert!(FontWeight::Bold.is_bold());
        assert!(FontWeight::Numeric(700).is_bold());
        assert!(FontWeight::Numeric(900).is_bold());
        assert!(!FontWeight::Numeric(699).is_bold());
        assert!(!FontWeight::Bolder.is_bold());
        assert!(!FontWeight::Normal.is_bold());
    }

    #[test]
    fn test_to_css() {
        let styles = Styles {
            font_style: Some(FontStyle::Italic),
            font_weight: Some(FontWeight::Numeric(700)),
            text_decoration: Some(TextDecoration::Underline),
        };
        assert_eq!(
            styles.to_css(),
            "font-style: italic; font-weight: 700; text-decoration: underline"
        );
        assert_eq!(Styles::default().to_css(), "");
    }

    #[test]
    fn test_parse_declarations() {
        let styles: Styles = "font-weight: 700; ; text-decoration: line-through;"
            .parse()
            .unwrap();
        assert_eq!(styles.font_style, None);
        assert_eq!(styles.font_weight, Some(FontWeight::Numeric(700)));
        assert_eq!(styles.text_decoration, Some(TextDecoration::LineThrough));
    }

    #[test]
    fn test_parse_empty() {
        let styles: Styles = "  ".parse().unwrap();
        assert!(styles.is_empty());
    }

    #[test]
    fn test_parse_unknown_property() {
        assert_eq!(
            "color: red".parse::<Styles>(),
            Err(StyleError::UnknownProperty("color".to_owned()))
        );
        assert_eq!(
            "font-style".parse::<Styles>(),
            Err(StyleError::UnknownProperty("font-style".to_owned()))
        );
    }

    #[test]
    fn test_parse_invalid_value() {
        assert_eq!(
            "font-weight: heavy".parse::<Styles>(),
            Err(StyleError::InvalidValue {
                property: "font-weight",
                value: "heavy".to_owned(),
            })
        );
        assert_eq!(
            "slanted".parse::<FontStyle>(),
            Err(StyleError::InvalidValue {
                property: "font-style",
                value: "slanted".to_owned(),
            })
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for weight in [
            FontWeight::Normal,
            FontWeight::Bold,
            FontWeight::Bolder,
            FontWeight::Lighter,
            FontWeight::Numeric(350),
        ] {
            assert_eq!(weight.to_string().parse::<FontWeight>(), Ok(weight));
        }
    }
}
