//! Error types for the richtext library
//!
//! This module provides centralized error handling using `thiserror` across all components

use thiserror::Error;

/// Style-related errors
#[derive(Debug, Clone, Error, PartialEq, Eq, uniffi::Error)]
pub enum StyleError {
    /// Color literal could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Class name is not a single class token
    #[error("Invalid class name: {0:?}")]
    InvalidClassName(String),

    /// Style sheet could not be encoded or decoded
    #[error("Style sheet serialization failed: {0}")]
    Serialization(String),
}

impl StyleError {
    /// Create an invalid color error
    pub fn invalid_color(literal: impl Into<String>) -> Self {
        Self::InvalidColor(literal.into())
    }

    /// Create an invalid class name error
    pub fn invalid_class_name(name: impl Into<String>) -> Self {
        Self::InvalidClassName(name.into())
    }

    /// Create a serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization(reason.into())
    }
}

/// Result type for style operations
pub type StyleResult<T> = Result<T, StyleError>;

/// Errors raised while building rich text
#[derive(Debug, Clone, Error, PartialEq, Eq, uniffi::Error)]
pub enum RichTextError {
    /// More classes stacked on one character than the span table holds
    #[error("Too much style at index {index}: at most {capacity} classes may overlap")]
    TooMuchStyle { index: u64, capacity: u64 },

    /// Class name not present in the style sheet
    #[error("Unknown class: {0}")]
    UnknownClass(String),

    /// Style error
    #[error(transparent)]
    Style(#[from] StyleError),
}

impl RichTextError {
    /// Create a capacity error for the given character index
    #[must_use]
    pub const fn too_much_style(index: usize, capacity: usize) -> Self {
        Self::TooMuchStyle {
            index: index as u64,
            capacity: capacity as u64,
        }
    }

    /// Create an unknown class error
    pub fn unknown_class(name: impl Into<String>) -> Self {
        Self::UnknownClass(name.into())
    }
}

/// Result type for rich text operations
pub type RichTextResult<T> = Result<T, RichTextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_much_style_message() {
        let err = RichTextError::too_much_style(7, 4);
        assert!(err.to_string().contains("index 7"));
        assert!(err.to_string().contains("at most 4"));
    }

    #[test]
    fn test_unknown_class() {
        let err = RichTextError::unknown_class("keyword");
        assert!(err.to_string().contains("keyword"));
    }

    #[test]
    fn test_rich_text_error_from_style_error() {
        let style_err = StyleError::invalid_color("#12");
        let err: RichTextError = style_err.into();
        assert!(err.to_string().contains("#12"));
    }

    #[test]
    fn test_invalid_class_name_is_quoted() {
        let err = StyleError::invalid_class_name("two words");
        assert_eq!(err.to_string(), "Invalid class name: \"two words\"");
    }
}
