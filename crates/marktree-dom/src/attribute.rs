//! Tag attributes and their typed accessors.

use std::collections::HashMap;
use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;

use crate::TagNode;

/// Map of attribute names to attributes for one tag.
pub type AttributesMap = HashMap<String, Attribute>;

/// A `name[=value]` pair on a tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Attribute name as written. Never empty.
    pub name: String,
    /// Raw value, without quotes. Empty when `has_value` is false.
    pub value: String,
    /// False for boolean-style attributes written without `=value`.
    pub has_value: bool,
}

impl Attribute {
    /// An attribute written as `name=value`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            has_value: true,
        }
    }

    /// A boolean-style attribute written without a value, e.g. `disabled`.
    #[must_use]
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            has_value: false,
        }
    }

    /// The raw value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Parse the value as a boolean.
    ///
    /// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`,
    /// `FALSE`, `false`, `False`.
    ///
    /// # Errors
    ///
    /// Returns the standard library's [`ParseBoolError`] for any other text.
    pub fn as_bool(&self) -> Result<bool, ParseBoolError> {
        match self.value.as_str() {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            other => other.parse(),
        }
    }

    /// Parse the value as a platform-sized signed integer.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ParseIntError`] unchanged.
    pub fn as_int(&self) -> Result<isize, ParseIntError> {
        self.value.parse()
    }

    /// # Errors
    ///
    /// Returns the underlying [`ParseIntError`] unchanged.
    pub fn as_i8(&self) -> Result<i8, ParseIntError> {
        self.value.parse()
    }

    /// # Errors
    ///
    /// Returns the underlying [`ParseIntError`] unchanged.
    pub fn as_i16(&self) -> Result<i16, ParseIntError> {
        self.value.parse()
    }

    /// # Errors
    ///
    /// Returns the underlying [`ParseIntError`] unchanged.
    pub fn as_i32(&self) -> Result<i32, ParseIntError> {
        self.value.parse()
    }

    /// # Errors
    ///
    /// Returns the underlying [`ParseIntError`] unchanged.
    pub fn as_i64(&self) -> Result<i64, ParseIntError> {
        self.value.parse()
    }

    /// Parse the value as a platform-sized unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ParseIntError`] unchanged.
    pub fn as_uint(&self) -> Result<usize, ParseIntError> {
        self.value.parse()
    }

    /// # Errors
    ///
    /// Returns the underlying [`ParseIntError`] unchanged.
    pub fn as_u8(&self) -> Result<u8, ParseIntError> {
        self.value.parse()
    }

    /// # Errors
    ///
    /// Returns the underlying [`ParseIntError`] unchanged.
    pub fn as_u16(&self) -> Result<u16, ParseIntError> {
        self.value.parse()
    }

    /// # Errors
    ///
    /// Returns the underlying [`ParseIntError`] unchanged.
    pub fn as_u32(&self) -> Result<u32, ParseIntError> {
        self.value.parse()
    }

    /// # Errors
    ///
    /// Returns the underlying [`ParseIntError`] unchanged.
    pub fn as_u64(&self) -> Result<u64, ParseIntError> {
        self.value.parse()
    }

    /// # Errors
    ///
    /// Returns the underlying [`ParseFloatError`] unchanged.
    pub fn as_f32(&self) -> Result<f32, ParseFloatError> {
        self.value.parse()
    }

    /// # Errors
    ///
    /// Returns the underlying [`ParseFloatError`] unchanged.
    pub fn as_f64(&self) -> Result<f64, ParseFloatError> {
        self.value.parse()
    }
}

impl TagNode {
    /// Returns true if the tag carries an attribute called `name`.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Look up an attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Set `name` to `value`, replacing any previous attribute of that name.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let _previous = self
            .attributes
            .insert(name.to_string(), Attribute::new(name, value));
    }

    /// Store `attribute` under its own name and return whatever it replaced.
    pub fn insert_attribute(&mut self, attribute: Attribute) -> Option<Attribute> {
        self.attributes.insert(attribute.name.clone(), attribute)
    }

    /// Remove an attribute, returning it if it was present.
    pub fn remove_attribute(&mut self, name: &str) -> Option<Attribute> {
        self.attributes.remove(name)
    }

    /// Attributes sorted by name, the order used when rendering.
    #[must_use]
    pub fn sorted_attributes(&self) -> Vec<&Attribute> {
        let mut attributes: Vec<&Attribute> = self.attributes.values().collect();
        attributes.sort_by(|a, b| a.name.cmp(&b.name));
        attributes
    }
}
