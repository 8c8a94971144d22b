//! Record schema definition
//!
//! A `RecordSchema` is built once per record type and describes its fields
//! and field policy.

use std::fmt;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use super::field::FieldDefinition;
use super::policy::FieldPolicy;

/// Field name holding the authenticated user, when a record declares it
pub const USER_FIELD: &str = "user";

/// Field name holding the authenticated user's id
pub const USER_ID_FIELD: &str = "userId";

/// Schema of a record type
#[derive(Debug, Clone)]
pub struct RecordSchema {
    name: String,
    fields: Vec<FieldDefinition>,
    index: FxHashMap<String, usize>,
    policy: FieldPolicy,
    extra: Option<String>,
}

impl RecordSchema {
    /// Start building a schema for the record type `name`
    pub fn builder(name: impl Into<String>) -> RecordSchemaBuilder {
        RecordSchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
            policy: FieldPolicy::default(),
            extra: None,
        }
    }

    /// Name of the record type
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields, in declaration order
    #[must_use]
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// The record's field policy
    #[must_use]
    pub const fn policy(&self) -> &FieldPolicy {
        &self.policy
    }

    /// Name of the extra-properties field, if the record has one
    #[must_use]
    pub fn extra_field(&self) -> Option<&str> {
        self.extra.as_deref()
    }

    /// Look up a field by name or alias
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        if let Some(&idx) = self.index.get(name) {
            return self.fields.get(idx);
        }
        self.fields.iter().find(|field| field.matches_name(name))
    }

    /// Check if this schema declares a field with the given name or alias
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Whether population must leave `name` untouched
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.policy.is_excluded(name)
    }

    /// Whether `name` is listed as a file field
    #[must_use]
    pub fn is_file_field(&self, name: &str) -> bool {
        self.policy.is_file_field(name)
    }

    /// Fields population may assign, in declaration order
    pub fn eligible_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields
            .iter()
            .filter(|field| !self.policy.is_excluded(&field.name))
    }

    /// Name of the implicit owner-id field
    ///
    /// A case-insensitive `dto` suffix is stripped from the record name, the
    /// first character is lower-cased and `Id` appended: `ImageDto` gives
    /// `imageId`.
    #[must_use]
    pub fn owner_id_field(&self) -> String {
        let name = self.name.as_str();
        let stem = name
            .len()
            .checked_sub(3)
            .filter(|&cut| name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case("dto"))
            .map_or(name, |cut| &name[..cut]);

        format!("{}Id", lower_first(stem))
    }
}

impl fmt::Display for RecordSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ {} }}",
            self.name,
            self.fields
                .iter()
                .map(|field| {
                    let nullable = if field.nullable { "?" } else { "" };
                    format!("{}: {}{nullable}", field.name, field.field_type)
                })
                .join(", ")
        )
    }
}

/// Builder for [`RecordSchema`]
#[derive(Debug, Clone)]
pub struct RecordSchemaBuilder {
    name: String,
    fields: Vec<FieldDefinition>,
    policy: FieldPolicy,
    extra: Option<String>,
}

impl RecordSchemaBuilder {
    /// Add a field
    #[must_use]
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Restrict assignment to these fields
    #[must_use]
    pub fn only(mut self, names: &[&str]) -> Self {
        self.policy.only = to_owned_names(names);
        self
    }

    /// Skip these fields during assignment
    #[must_use]
    pub fn exclude(mut self, names: &[&str]) -> Self {
        self.policy.exclude = to_owned_names(names);
        self
    }

    /// Mark these fields as file fields
    #[must_use]
    pub fn files(mut self, names: &[&str]) -> Self {
        self.policy.files = to_owned_names(names);
        self
    }

    /// Fields returned by `compact_data`
    #[must_use]
    pub fn keys(mut self, names: &[&str]) -> Self {
        self.policy.keys = to_owned_names(names);
        self
    }

    /// Name the field that stores undeclared properties
    #[must_use]
    pub fn extra(mut self, name: impl Into<String>) -> Self {
        self.extra = Some(name.into());
        self
    }

    /// Finish the schema
    #[must_use]
    pub fn build(self) -> RecordSchema {
        let index = self
            .fields
            .iter()
            .enumerate()
            .map(|(idx, field)| (field.name.clone(), idx))
            .collect();

        RecordSchema {
            name: self.name,
            fields: self.fields,
            index,
            policy: self.policy,
            extra: self.extra,
        }
    }
}

fn to_owned_names(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

/// Lower-case the first character of `s`
#[must_use]
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
