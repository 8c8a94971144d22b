//! Module for record field definitions
//!
//! This module provides the descriptors that make up a record schema: field
//! definitions, the per-record field policy, and the schema itself.

pub mod field;
pub mod policy;
mod record_schema;

pub use field::{FieldDefinition, FieldType};
pub use policy::FieldPolicy;
pub use record_schema::{
    RecordSchema, RecordSchemaBuilder, USER_FIELD, USER_ID_FIELD, lower_first,
};
