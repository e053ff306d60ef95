//! `UniFFI` bindings for the rich text models
//!
//! This module exposes a document object that host applications (iOS, macOS,
//! Android) fill with attribute ranges and render to HTML or RTF.

use std::sync::{Mutex, PoisonError};

use crate::{
    config::RtfConfig,
    document::StringRange,
    error::RichTextError,
    formats::{MarkupKind, RichTextFormat, html::HtmlRichText, rtf::RichText},
    style::RichTextAttributes,
};

#[derive(Debug, Clone)]
struct Assignment {
    style: RichTextAttributes,
    range: StringRange,
}

/// Text plus the attribute ranges recorded against it
#[derive(Debug, uniffi::Object)]
pub struct RichTextDocument {
    text: String,
    config: RtfConfig,
    assignments: Mutex<Vec<Assignment>>,
}

#[uniffi::export]
impl RichTextDocument {
    #[uniffi::constructor]
    #[must_use]
    pub fn new(text: String) -> Self {
        Self::with_config(text, RtfConfig::default())
    }

    #[uniffi::constructor]
    #[must_use]
    pub fn with_config(text: String, config: RtfConfig) -> Self {
        Self {
            text,
            config,
            assignments: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    /// Record `style` over `length` characters starting at `location`
    pub fn add_attributes(&self, style: RichTextAttributes, location: u64, length: u64) {
        let range = StringRange::new(to_index(location), to_index(length));
        self.lock().push(Assignment { style, range });
    }

    pub fn attribute_count(&self) -> u32 {
        u32::try_from(self.lock().len()).unwrap_or(u32::MAX)
    }

    /// Forget every recorded range
    pub fn clear_attributes(&self) {
        self.lock().clear();
    }

    pub fn html(&self, for_presentation: bool) -> String {
        self.html_text().with_presentation(for_presentation).html()
    }

    /// Render as RTF
    ///
    /// # Errors
    ///
    /// Returns [`RichTextError::TooMuchStyle`] when more classes overlap on a
    /// character than the configured capacity
    pub fn rtf(&self) -> Result<String, RichTextError> {
        Ok(self.rich_text()?.to_rtf())
    }

    /// Render as the given markup
    ///
    /// # Errors
    ///
    /// Returns any error of [`RichTextDocument::rtf`] for [`MarkupKind::Rtf`]
    pub fn render(&self, kind: MarkupKind) -> Result<String, RichTextError> {
        let format: Box<dyn RichTextFormat + '_> = match kind {
            MarkupKind::Html => Box::new(self.html_text()),
            MarkupKind::Rtf => Box::new(self.rich_text()?),
        };
        Ok(format.render())
    }
}

impl RichTextDocument {
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Assignment>> {
        self.assignments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn html_text(&self) -> HtmlRichText<'_> {
        let mut html = HtmlRichText::new(&self.text);
        for assignment in self.lock().iter() {
            html.add_attributes(&assignment.style, assignment.range);
        }
        html
    }

    fn rich_text(&self) -> Result<RichText, RichTextError> {
        let mut rich = RichText::with_config(self.text.clone(), self.config.clone());
        for assignment in self.lock().iter() {
            rich.add_attributes(&assignment.style, assignment.range)?;
        }
        Ok(rich)
    }
}

fn to_index(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
