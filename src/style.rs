//! Style attributes attached to ranges of rich text

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{StyleError, StyleResult};

/// An ARGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Record)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from RGB components
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self { a, r, g, b }
    }

    #[must_use]
    pub const fn argb(&self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColor`] for any other shape.
    pub fn from_hex(literal: &str) -> StyleResult<Self> {
        let digits = literal.strip_prefix('#').unwrap_or(literal);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StyleError::invalid_color(literal));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| StyleError::invalid_color(literal))?;
        match digits.len() {
            6 => Ok(Self::from_argb(0xFF00_0000 | value)),
            8 => Ok(Self::from_argb(value)),
            _ => Err(StyleError::invalid_color(literal)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.argb())
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum,
)]
pub enum UnderlineStyle {
    #[default]
    None,
    Single,
    Double,
    Thick,
    Wavy,
}

/// A named class and the presentation it carries.
///
/// Every field besides `class_name` is optional; an unset field leaves the
/// value from an enclosing class untouched when sets are merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct RichTextAttributes {
    pub class_name: String,
    pub font_name: Option<String>,
    /// Size in points
    pub font_size: Option<f32>,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub underline: UnderlineStyle,
    pub underline_color: Option<Color>,
    /// Hyperlink target
    pub link: Option<String>,
}

impl RichTextAttributes {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, points: f32) -> Self {
        self.font_size = Some(points);
        self
    }

    #[must_use]
    pub const fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    #[must_use]
    pub const fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub const fn with_underline(mut self, style: UnderlineStyle, color: Option<Color>) -> Self {
        self.underline = style;
        self.underline_color = color;
        self
    }

    #[must_use]
    pub fn with_link(mut self, target: impl Into<String>) -> Self {
        self.link = Some(target.into());
        self
    }

    /// Overlay `other` on top of `self`: fields set in `other` win, unset
    /// fields keep the current value.
    pub fn merge(&mut self, other: &Self) {
        if !other.class_name.is_empty() {
            self.class_name.clone_from(&other.class_name);
        }
        if other.font_name.is_some() {
            self.font_name.clone_from(&other.font_name);
        }
        if other.font_size.is_some() {
            self.font_size = other.font_size;
        }
        if other.foreground.is_some() {
            self.foreground = other.foreground;
        }
        if other.background.is_some() {
            self.background = other.background;
        }
        if other.underline != UnderlineStyle::None {
            self.underline = other.underline;
        }
        if other.underline_color.is_some() {
            self.underline_color = other.underline_color;
        }
        if other.link.is_some() {
            self.link.clone_from(&other.link);
        }
    }

    /// Merge a sequence of attribute sets in order, later sets winning.
    pub fn merged<'a>(sets: impl IntoIterator<Item = &'a Self>) -> Self {
        sets.into_iter().fold(Self::default(), |mut acc, set| {
            acc.merge(set);
            acc
        })
    }

    /// Colors this set references, in foreground, background, underline order
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        [self.foreground, self.background, self.underline_color]
            .into_iter()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_argb_round_trip() {
        let color = Color::from_argb(0x80FF_1020);
        assert_eq!(color, Color { a: 0x80, r: 0xFF, g: 0x10, b: 0x20 });
        assert_eq!(color.argb(), 0x80FF_1020);
    }

    #[test]
    fn color_from_hex() {
        assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(
            Color::from_hex("#7f00ff00").unwrap(),
            Color { a: 0x7F, r: 0, g: 0xFF, b: 0 }
        );
        assert!(Color::from_hex("#F00").is_err());
        assert!(Color::from_hex("#+12345").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
    }

    #[test]
    fn merge_later_wins_when_present() {
        let mut base = RichTextAttributes::new("body")
            .with_font("Helvetica")
            .with_font_size(12.0)
            .with_foreground(Color::BLACK);
        let overlay = RichTextAttributes::new("keyword").with_foreground(Color::rgb(0, 0, 255));

        base.merge(&overlay);

        assert_eq!(base.class_name, "keyword");
        assert_eq!(base.font_name.as_deref(), Some("Helvetica"));
        assert_eq!(base.font_size, Some(12.0));
        assert_eq!(base.foreground, Some(Color::rgb(0, 0, 255)));
    }

    #[test]
    fn merge_keeps_underline_when_incoming_is_none() {
        let underlined = RichTextAttributes::new("error")
            .with_underline(UnderlineStyle::Wavy, Some(Color::rgb(255, 0, 0)));
        let plain = RichTextAttributes::new("");

        let merged = RichTextAttributes::merged([&underlined, &plain]);

        assert_eq!(merged.underline, UnderlineStyle::Wavy);
        assert_eq!(merged.class_name, "error");
    }

    #[test]
    fn colors_lists_every_set_color() {
        let attrs = RichTextAttributes::new("x")
            .with_foreground(Color::BLACK)
            .with_underline(UnderlineStyle::Single, Some(Color::WHITE));
        assert_eq!(attrs.colors().collect::<Vec<_>>(), vec![Color::BLACK, Color::WHITE]);
    }
}
