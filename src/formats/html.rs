//! Interval-list rich text rendered as nested HTML

use tracing::trace;

use crate::{
    document::{Span, SpanList, StringRange},
    error::{RichTextError, RichTextResult},
    formats::{MarkupKind, RichTextFormat, presentation},
    style::RichTextAttributes,
    stylesheet::StyleSheet,
};

/// Class names rendered as an element of the same name
const ELEMENT_CLASSES: &[&str] = &["a", "h1", "h2", "h3", "h4", "code", "strong", "em"];

/// Class that renders its content without any tag
const BODY_CLASS: &str = "body";

/// Rich text over a borrowed buffer, rendered as HTML.
///
/// Any number of spans may overlap. Spans sharing a start are nested longest
/// outermost; spans that cross each other are split so the output stays
/// properly nested.
#[derive(Debug, Clone)]
pub struct HtmlRichText<'a> {
    text: &'a str,
    spans: SpanList,
    for_presentation: bool,
}

impl<'a> HtmlRichText<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            spans: SpanList::new(text.chars().count()),
            for_presentation: false,
        }
    }

    #[must_use]
    pub const fn with_presentation(mut self, for_presentation: bool) -> Self {
        self.for_presentation = for_presentation;
        self
    }

    pub const fn set_for_presentation(&mut self, for_presentation: bool) {
        self.for_presentation = for_presentation;
    }

    #[must_use]
    pub const fn for_presentation(&self) -> bool {
        self.for_presentation
    }

    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Mark `range` with the class and link of `style`. Empty ranges are ignored.
    pub fn add_attributes(&mut self, style: &RichTextAttributes, range: StringRange) {
        let range = range.fit_in(self.spans.len());
        self.spans
            .insert(range, &style.class_name, style.link.as_deref());
    }

    /// Mark `range` with the class `class_name` from `sheet`.
    ///
    /// # Errors
    ///
    /// Returns [`RichTextError::UnknownClass`] if the sheet lacks the class
    pub fn add_class(
        &mut self,
        sheet: &StyleSheet,
        class_name: &str,
        range: StringRange,
    ) -> RichTextResult<()> {
        let style = sheet
            .get(class_name)
            .ok_or_else(|| RichTextError::unknown_class(class_name))?;
        self.add_attributes(style, range);
        Ok(())
    }

    /// Spans starting at `index`, outermost first
    #[must_use]
    pub fn spans_at(&self, index: usize) -> &[Span] {
        self.spans.starting_at(index)
    }

    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter()
    }

    /// Render the text as HTML, applying the presentation cleanup when enabled.
    #[must_use]
    pub fn html(&self) -> String {
        let mut emitter = Emitter::new(self.for_presentation, self.text.len());
        let len = self.spans.len();

        for (index, ch) in self.text.chars().enumerate() {
            emitter.close_ending_at(index);
            for span in self.spans.starting_at(index) {
                emitter.open(span.clone(), true);
            }
            emitter.at_line_start = false;
            emitter.write_char(ch);
        }
        emitter.close_ending_at(len);
        emitter.close_all();

        trace!(
            chars = len,
            bytes = emitter.out.len(),
            presentation = self.for_presentation,
            "rendered html"
        );

        if self.for_presentation {
            presentation::apply(&emitter.out)
        } else {
            emitter.out
        }
    }
}

impl RichTextFormat for HtmlRichText<'_> {
    fn kind(&self) -> MarkupKind {
        MarkupKind::Html
    }

    fn render(&self) -> String {
        self.html()
    }
}

/// Scan state while writing HTML
struct Emitter {
    out: String,
    stack: Vec<Span>,
    presentation: bool,
    hidden_depth: usize,
    literal_depth: usize,
    at_line_start: bool,
}

impl Emitter {
    fn new(presentation: bool, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity * 2),
            stack: Vec::new(),
            presentation,
            hidden_depth: 0,
            literal_depth: 0,
            at_line_start: true,
        }
    }

    const fn suppressed(&self) -> bool {
        self.hidden_depth > 0 || self.literal_depth > 0
    }

    /// Push `span`, writing its opening tag unless output is suppressed.
    ///
    /// `fresh` is false when a split span is reopened; the `<pre>` decision is
    /// only made for fresh spans.
    fn open(&mut self, mut span: Span, fresh: bool) {
        if self.presentation {
            if span.is_hidden() {
                self.hidden_depth += 1;
            }
            if span.is_xml() {
                self.literal_depth += 1;
            }
        }

        if !self.suppressed() {
            if fresh {
                span.is_pre = span.is_code() && self.at_line_start;
            }
            if span.is_pre {
                self.out.push_str("<pre>");
            }
            write_open_tag(&mut self.out, &span);
        }
        self.stack.push(span);
    }

    fn close_top(&mut self) -> Option<Span> {
        let span = self.stack.pop()?;

        if !self.suppressed() {
            write_close_tag(&mut self.out, &span);
            if span.is_pre {
                self.out.push_str("</pre>");
            }
        }

        if self.presentation {
            if span.is_hidden() {
                self.hidden_depth -= 1;
            }
            if span.is_xml() {
                self.literal_depth -= 1;
            }
        }
        Some(span)
    }

    /// Close every open span that ends at `index`.
    ///
    /// The outermost such span decides how far the stack unwinds; spans above
    /// it that continue past `index` are reopened afterwards, outer first.
    fn close_ending_at(&mut self, index: usize) {
        let Some(depth) = self.stack.iter().position(|s| s.range.end() <= index) else {
            return;
        };

        let mut continuing = Vec::new();
        while self.stack.len() > depth {
            if let Some(span) = self.close_top()
                && span.range.end() > index
            {
                continuing.push(span);
            }
        }

        // a continued code block stays inline so it does not start a second `<pre>`
        for mut span in continuing.into_iter().rev() {
            span.is_pre = false;
            self.open(span, false);
        }
    }

    fn close_all(&mut self) {
        while self.close_top().is_some() {}
    }

    fn write_char(&mut self, ch: char) {
        if self.hidden_depth > 0 {
            return;
        }
        if self.literal_depth > 0 {
            self.out.push(ch);
            return;
        }
        match ch {
            '&' => self.out.push_str("&amp;"),
            '<' => self.out.push_str("&lt;"),
            '>' => self.out.push_str("&gt;"),
            '\n' => {
                self.out.push_str("<br/>");
                self.at_line_start = true;
            }
            c => self.out.push(c),
        }
    }
}

enum Tag<'s> {
    Element(&'s str),
    Span(&'s str),
    None,
}

fn tag_for(span: &Span) -> Tag<'_> {
    let class = span.class_name();
    if class == BODY_CLASS {
        Tag::None
    } else if ELEMENT_CLASSES.contains(&class) {
        Tag::Element(class)
    } else {
        Tag::Span(class)
    }
}

fn write_open_tag(out: &mut String, span: &Span) {
    match tag_for(span) {
        Tag::Element("a") if span.url.is_some() => {
            out.push_str("<a href=\"");
            write_attribute(out, span.url.as_deref().unwrap_or_default());
            out.push_str("\">");
        }
        Tag::Element(name) => {
            out.push('<');
            out.push_str(name);
            out.push('>');
        }
        Tag::Span(class) => {
            out.push_str("<span class=\"");
            write_attribute(out, class);
            out.push_str("\">");
        }
        Tag::None => {}
    }
}

fn write_close_tag(out: &mut String, span: &Span) {
    match tag_for(span) {
        Tag::Element(name) => {
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        Tag::Span(_) => out.push_str("</span>"),
        Tag::None => {}
    }
}

fn write_attribute(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}
