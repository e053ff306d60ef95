//! Named classes that callers apply to ranges by name

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    error::{StyleError, StyleResult},
    style::RichTextAttributes,
};

static CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").unwrap());

/// Check that `name` is a single class token
#[must_use]
pub fn is_valid_class_name(name: &str) -> bool {
    CLASS_NAME.is_match(name)
}

/// An ordered collection of attribute sets keyed by class name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    classes: Vec<RichTextAttributes>,
}

impl StyleSheet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            classes: Vec::new(),
        }
    }

    /// Add a class, replacing any existing class of the same name in place.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidClassName`] if the class name is not a single token
    pub fn insert(&mut self, attributes: RichTextAttributes) -> StyleResult<()> {
        if !is_valid_class_name(&attributes.class_name) {
            return Err(StyleError::invalid_class_name(attributes.class_name));
        }

        match self
            .classes
            .iter_mut()
            .find(|c| c.class_name == attributes.class_name)
        {
            Some(existing) => *existing = attributes,
            None => self.classes.push(attributes),
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, class_name: &str) -> Option<&RichTextAttributes> {
        self.classes.iter().find(|c| c.class_name == class_name)
    }

    #[must_use]
    pub fn contains(&self, class_name: &str) -> bool {
        self.get(class_name).is_some()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RichTextAttributes> {
        self.classes.iter()
    }

    /// Encode the sheet as CBOR
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Serialization`] if encoding fails
    pub fn to_cbor(&self) -> StyleResult<Vec<u8>> {
        serde_cbor::to_vec(self).map_err(|e| StyleError::serialization(e.to_string()))
    }

    /// Decode a sheet written by [`StyleSheet::to_cbor`], validating every class name
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Serialization`] for malformed data and
    /// [`StyleError::InvalidClassName`] for a bad class name
    pub fn from_cbor(data: &[u8]) -> StyleResult<Self> {
        let decoded: Self =
            serde_cbor::from_slice(data).map_err(|e| StyleError::serialization(e.to_string()))?;

        let mut sheet = Self::new();
        for attributes in decoded.classes {
            sheet.insert(attributes)?;
        }
        Ok(sheet)
    }
}

impl FromIterator<RichTextAttributes> for StyleSheet {
    /// Collect attribute sets, skipping any whose class name is invalid
    fn from_iter<I: IntoIterator<Item = RichTextAttributes>>(iter: I) -> Self {
        let mut sheet = Self::new();
        for attributes in iter {
            if let Err(err) = sheet.insert(attributes) {
                tracing::warn!(%err, "skipping style sheet entry");
            }
        }
        sheet
    }
}
