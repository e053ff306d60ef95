//! Rendering configuration

use serde::{Deserialize, Serialize};

/// Number of classes the span table holds per character unless configured otherwise
pub const DEFAULT_CLASS_CAPACITY: usize = 4;

/// Settings for [`RichText`](crate::formats::rtf::RichText) and its RTF output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct RtfConfig {
    /// Maximum number of classes stacked on a single character
    pub class_capacity: u32,
    /// Written into the `\*\generator` group
    pub generator: String,
    /// Font table entry used when no class names a font
    pub default_font: String,
    /// Write non-ASCII characters as `\uN?` instead of passing them through
    pub escape_unicode: bool,
}

impl RtfConfig {
    #[must_use]
    pub fn class_capacity(&self) -> usize {
        usize::try_from(self.class_capacity).unwrap_or(usize::MAX)
    }
}

impl Default for RtfConfig {
    fn default() -> Self {
        Self {
            class_capacity: DEFAULT_CLASS_CAPACITY as u32,
            generator: concat!("richtext ", env!("CARGO_PKG_VERSION")).to_string(),
            default_font: "Calibri".to_string(),
            escape_unicode: false,
        }
    }
}
