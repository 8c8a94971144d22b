//! A Rust library for populating data transfer records from mappings and
//! requests, with field policies, type coercion and file-upload handling,
//! plus a generator for record stub files.

extern crate self as dto_kit;

pub mod config;
pub mod error;
pub mod file;
pub mod generator;
pub mod ops;
pub mod populator;
pub mod record;
pub mod request;
pub mod schema;
pub mod utils;
pub mod value;

// Re-export the most common types for easier use
// Core types
pub use config::{DtoConfig, GeneratorConfig, PopulatorConfig};
pub use error::{DtoError, Result};
pub use file::UploadedFile;
pub use value::{Mapping, ObjectMap, Value, mapping_from_json};

// Records
pub use dto_kit_macros::Record;
pub use record::{FieldValue, Record, RecordHooks, Slot};
pub use schema::{FieldDefinition, FieldType, RecordSchema};

// Population
pub use ops::{Argument, Operation};
pub use populator::{DataAccess, Populator};
pub use request::{AuthUser, InMemoryRequest, Request};

// Generation
pub use generator::{Generator, GeneratorOptions};
