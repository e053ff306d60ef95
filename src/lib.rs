#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

uniffi::setup_scaffolding!();

pub mod config;
pub mod document;
pub mod error;
pub mod ffi;
pub mod formats;
pub mod style;
pub mod stylesheet;

// Re-export the common entry points for convenience
pub use config::{DEFAULT_CLASS_CAPACITY, RtfConfig};
pub use document::{Span, StringRange};
pub use error::{RichTextError, RichTextResult, StyleError, StyleResult};
pub use formats::{MarkupKind, RichTextFormat, html::HtmlRichText, rtf::RichText};
pub use style::{Color, RichTextAttributes, UnderlineStyle};
pub use stylesheet::StyleSheet;
