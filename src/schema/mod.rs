//! Record schemas and input adaptation.
//!
//! [`field_def`] holds the descriptors generated for every record type;
//! [`adapt`] coerces input values to a field's declared type.

pub mod adapt;
pub mod field_def;

pub use adapt::coerce;
pub use field_def::{
    FieldDefinition, FieldPolicy, FieldType, RecordSchema, RecordSchemaBuilder, USER_FIELD,
    USER_ID_FIELD,
};
