//! Span-table rich text rendered as RTF
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use core::fmt::Write;

use tracing::{debug, trace};

use crate::{
    config::RtfConfig,
    document::{ClassTable, StringRange, StyleId},
    error::{RichTextError, RichTextResult},
    formats::{MarkupKind, RichTextFormat},
    style::{Color, RichTextAttributes, UnderlineStyle},
    stylesheet::StyleSheet,
};

/// Text with up to [`RtfConfig::class_capacity`] classes stacked on each character.
///
/// Attribute sets are applied with [`RichText::add_attributes`]; the first set
/// covering a character takes its first slot, and later slots override earlier
/// ones field by field when the output is written.
#[derive(Debug, Clone)]
pub struct RichText {
    text: String,
    styles: Vec<RichTextAttributes>,
    table: ClassTable,
    config: RtfConfig,
}

impl RichText {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_config(text, RtfConfig::default())
    }

    pub fn with_config(text: impl Into<String>, config: RtfConfig) -> Self {
        let text = text.into();
        let table = ClassTable::new(text.chars().count(), config.class_capacity());
        Self {
            text,
            styles: Vec::new(),
            table,
            config,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn config(&self) -> &RtfConfig {
        &self.config
    }

    /// Apply `style` to every character in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`RichTextError::TooMuchStyle`] when a character in `range`
    /// already carries the configured number of classes. Nothing is applied
    /// in that case.
    pub fn add_attributes(
        &mut self,
        style: &RichTextAttributes,
        range: StringRange,
    ) -> RichTextResult<()> {
        if range.fit_in(self.table.len()).is_empty() {
            trace!(class = %style.class_name, %range, "ignoring empty range");
            return Ok(());
        }

        let existing = self.styles.iter().position(|s| s == style);
        let id = StyleId(existing.unwrap_or(self.styles.len()) as u32);

        if let Err(err) = self.table.assign(id, range) {
            debug!(%err, class = %style.class_name, %range, "rejected attributes");
            return Err(err);
        }

        if existing.is_none() {
            self.styles.push(style.clone());
        }
        Ok(())
    }

    /// Apply the class `class_name` from `sheet`.
    ///
    /// # Errors
    ///
    /// Returns [`RichTextError::UnknownClass`] if the sheet lacks the class, or
    /// any error from [`RichText::add_attributes`]
    pub fn add_class(
        &mut self,
        sheet: &StyleSheet,
        class_name: &str,
        range: StringRange,
    ) -> RichTextResult<()> {
        let style = sheet
            .get(class_name)
            .ok_or_else(|| RichTextError::unknown_class(class_name))?;
        self.add_attributes(style, range)
    }

    /// Attribute sets active at `index`, in slot order
    pub fn classes_at(&self, index: usize) -> impl Iterator<Item = &RichTextAttributes> {
        self.table.at(index).iter().map(|id| &self.styles[id.index()])
    }

    /// Render the whole document as RTF.
    #[must_use]
    pub fn to_rtf(&self) -> String {
        let tables = Tables::collect(&self.styles);
        let mut out = String::with_capacity(self.text.len() * 2 + 256);

        self.write_header(&mut out, &tables);

        let mut current: &[StyleId] = &[];
        let mut group_open = false;
        let mut groups = 0usize;

        for (ch, active) in self.text.chars().zip(self.table.iter()) {
            if active != current {
                if group_open {
                    out.push('}');
                    group_open = false;
                }
                if !active.is_empty() {
                    let merged =
                        RichTextAttributes::merged(active.iter().map(|id| &self.styles[id.index()]));
                    out.push('{');
                    if tables.write_controls(&mut out, &merged) {
                        out.push(' ');
                    }
                    group_open = true;
                    groups += 1;
                }
                current = active;
            }
            write_char(&mut out, ch, self.config.escape_unicode);
        }

        if group_open {
            out.push('}');
        }
        if self.text.ends_with('\n') {
            out.push_str(r"\par");
        }
        out.push('}');

        trace!(
            groups,
            colors = tables.colors.len(),
            fonts = tables.fonts.len(),
            "rendered rtf"
        );
        out
    }

    fn write_header(&self, out: &mut String, tables: &Tables<'_>) {
        out.push_str(r"{\rtf1\ansi\ansicpg1252\deff0\nouicompat\deflang1033{\fonttbl");
        if tables.fonts.is_empty() {
            write_font_entry(out, 0, &self.config.default_font);
        }
        for (index, name) in tables.fonts.iter().enumerate() {
            write_font_entry(out, index, name);
        }
        out.push_str("}\n");

        out.push_str(r"{\colortbl ;");
        for color in &tables.colors {
            let _ = write!(out, r"\red{}\green{}\blue{};", color.r, color.g, color.b);
        }
        out.push_str("}\n");

        out.push_str(r"{\*\generator ");
        write_escaped(out, &self.config.generator);
        out.push_str(";}\\viewkind4\\uc1\n\\pard ");
    }
}

impl RichTextFormat for RichText {
    fn kind(&self) -> MarkupKind {
        MarkupKind::Rtf
    }

    fn render(&self) -> String {
        self.to_rtf()
    }
}

/// Color and font tables, in first-seen order over the interned styles
struct Tables<'a> {
    colors: Vec<Color>,
    fonts: Vec<&'a str>,
}

impl<'a> Tables<'a> {
    fn collect(styles: &'a [RichTextAttributes]) -> Self {
        let mut colors: Vec<Color> = Vec::new();
        let mut fonts: Vec<&str> = Vec::new();

        for style in styles {
            for color in style.colors() {
                if !colors.iter().any(|c| c.argb() == color.argb()) {
                    colors.push(color);
                }
            }
            if let Some(font) = style.font_name.as_deref()
                && !fonts.contains(&font)
            {
                fonts.push(font);
            }
        }

        Self { colors, fonts }
    }

    /// 1-based, index 0 being the automatic color
    fn color_index(&self, color: Color) -> usize {
        self.colors
            .iter()
            .position(|c| c.argb() == color.argb())
            .map_or(0, |i| i + 1)
    }

    fn font_index(&self, name: &str) -> usize {
        self.fonts.iter().position(|f| *f == name).unwrap_or(0)
    }

    /// Returns whether any control word was written
    fn write_controls(&self, out: &mut String, attrs: &RichTextAttributes) -> bool {
        let start = out.len();
        if let Some(font) = attrs.font_name.as_deref() {
            let _ = write!(out, r"\f{}", self.font_index(font));
        }
        if let Some(size) = attrs.font_size {
            let _ = write!(out, r"\fs{}", (size * 2.0).round() as i64);
        }
        if let Some(color) = attrs.foreground {
            let _ = write!(out, r"\cf{}", self.color_index(color));
        }
        if let Some(color) = attrs.background {
            let _ = write!(out, r"\highlight{}", self.color_index(color));
        }
        if attrs.underline != UnderlineStyle::None {
            if let Some(color) = attrs.underline_color {
                let _ = write!(out, r"\ulc{}", self.color_index(color));
            }
            out.push_str(match attrs.underline {
                UnderlineStyle::Double => r"\uldb",
                UnderlineStyle::Thick => r"\ulth",
                UnderlineStyle::Wavy => r"\ulwave",
                UnderlineStyle::Single | UnderlineStyle::None => r"\ul",
            });
        }
        out.len() > start
    }
}

fn write_font_entry(out: &mut String, index: usize, name: &str) {
    let _ = write!(out, r"{{\f{index}\fnil\fcharset0 ");
    write_escaped(out, name);
    out.push_str(";}");
}

fn write_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        write_char(out, ch, false);
    }
}

fn write_char(out: &mut String, ch: char, escape_unicode: bool) {
    match ch {
        '\\' | '{' | '}' => {
            out.push('\\');
            out.push(ch);
        }
        '\n' => out.push_str("\\par\n"),
        '\r' => {}
        c if escape_unicode && !c.is_ascii() => {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, r"\u{}?", *unit as i16);
            }
        }
        c => out.push(c),
    }
}
