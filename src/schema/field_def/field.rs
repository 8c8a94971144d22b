//! Field definition for record schemas
//!
//! This module defines the descriptors the derive macro emits for every
//! record field.

use std::fmt;

use crate::value::{ObjectMap, Value};

/// Represents the declared type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Text value
    Text,
    /// Integer value
    Integer,
    /// Floating-point value
    Float,
    /// Boolean value
    Boolean,
    /// Ordered structured array
    Array,
    /// Free-form object
    Object,
    /// A single file handle
    File,
    /// A sequence of file handles
    FileList,
    /// Any value, stored as given
    Other,
}

impl FieldType {
    /// The value an unset, non-nullable field of this type is filled with
    ///
    /// File types have no default; such fields stay unset.
    #[must_use]
    pub fn default_value(&self) -> Option<Value> {
        match self {
            Self::Text => Some(Value::Text(String::new())),
            Self::Integer => Some(Value::Int(0)),
            Self::Float => Some(Value::Float(0.0)),
            Self::Boolean => Some(Value::Bool(false)),
            Self::Array => Some(Value::Array(Vec::new())),
            Self::Object => Some(Value::Object(ObjectMap::new())),
            Self::Other => Some(Value::Null),
            Self::File | Self::FileList => None,
        }
    }

    /// Whether values of this type are file handles
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File | Self::FileList)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "Text"),
            Self::Integer => write!(f, "Integer"),
            Self::Float => write!(f, "Float"),
            Self::Boolean => write!(f, "Boolean"),
            Self::Array => write!(f, "Array"),
            Self::Object => write!(f, "Object"),
            Self::File => write!(f, "File"),
            Self::FileList => write!(f, "FileList"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Descriptor of a single record field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Name of the field as seen by population sources and accessors
    pub name: String,
    /// Description of the field
    pub description: String,
    /// Declared type of the field
    pub field_type: FieldType,
    /// Whether the field can be explicitly null
    pub nullable: bool,
    /// Alternative input names for this field
    pub aliases: Vec<String>,
}

impl FieldDefinition {
    /// Create a new field definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        field_type: FieldType,
        nullable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            field_type,
            nullable,
            aliases: Vec::new(),
        }
    }

    /// Add an alias for this field
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Add multiple aliases for this field
    #[must_use]
    pub fn with_aliases(mut self, aliases: Vec<impl Into<String>>) -> Self {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Check if the given name matches this field or any of its aliases
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        if self.name == name {
            return true;
        }
        self.aliases.iter().any(|alias| alias == name)
    }

    /// Case-insensitive variant of [`matches_name`](Self::matches_name)
    #[must_use]
    pub fn matches_name_ignore_case(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.name.to_lowercase() == lowered
            || self.aliases.iter().any(|alias| alias.to_lowercase() == lowered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_by_type() {
        assert_eq!(FieldType::Text.default_value(), Some(Value::from("")));
        assert_eq!(FieldType::Integer.default_value(), Some(Value::Int(0)));
        assert_eq!(FieldType::Float.default_value(), Some(Value::Float(0.0)));
        assert_eq!(FieldType::Array.default_value(), Some(Value::Array(vec![])));
        assert_eq!(
            FieldType::Object.default_value(),
            Some(Value::Object(ObjectMap::new()))
        );
        assert_eq!(FieldType::File.default_value(), None);
    }

    #[test]
    fn test_alias_matching() {
        let field = FieldDefinition::new("name", "File name", FieldType::Text, false)
            .with_alias("filename");
        assert!(field.matches_name("name"));
        assert!(field.matches_name("filename"));
        assert!(!field.matches_name("NAME"));
        assert!(field.matches_name_ignore_case("NAME"));
        assert!(field.matches_name_ignore_case("FileName"));
    }
}
