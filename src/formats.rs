use std::fmt::Debug;

pub mod html;
pub mod presentation;
pub mod rtf;

/// Markup a rich text model renders to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum MarkupKind {
    Html,
    Rtf,
}

impl MarkupKind {
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Rtf => "text/rtf",
        }
    }

    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Rtf => "rtf",
        }
    }
}

pub trait RichTextFormat: Debug {
    /// The markup produced by [`RichTextFormat::render`]
    fn kind(&self) -> MarkupKind;

    /// Serialize the text and its styles. Calling this repeatedly yields the same output.
    fn render(&self) -> String;
}
