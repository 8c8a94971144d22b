//! Trait definitions for records
//!
//! A record is a struct of `Slot<T>` fields with a schema. The `Record`
//! derive macro implements [`Record`] from the struct definition; records
//! that need population hooks implement [`RecordHooks`] by hand and opt out
//! of the generated empty impl with `#[record(hooks)]`.

mod field_value;
mod slot;

pub use field_value::FieldValue;
pub use slot::Slot;

use crate::error::Result;
use crate::request::Request;
use crate::schema::RecordSchema;
use crate::value::{Mapping, ObjectMap, Value};

/// A struct whose fields can be populated by name
///
/// `get`, `put` and `is_set` address fields by their schema name, not by the
/// Rust identifier.
pub trait Record: Clone + Default + RecordHooks {
    /// The schema of this record type, built once
    fn schema() -> &'static RecordSchema;

    /// Current value of a field, or `None` when unset or undeclared
    fn get(&self, field: &str) -> Option<Value>;

    /// Store an already coerced value into a field
    ///
    /// Fails with `PropertyNotFound` for undeclared fields and
    /// `WrongArgument` when the value does not fit the field's type.
    fn put(&mut self, field: &str, value: Value) -> Result<()>;

    /// Whether a field has ever been assigned
    fn is_set(&self, field: &str) -> bool;

    /// Undeclared properties stored while force-properties is enabled
    fn extra(&self) -> Option<&ObjectMap> {
        None
    }

    /// Mutable access to the extra-properties store, if the record has one
    fn extra_mut(&mut self) -> Option<&mut ObjectMap> {
        None
    }
}

/// Optional extension points invoked during population
pub trait RecordHooks: Sized {
    /// Extract the body mapping from a request
    ///
    /// Returning `None` uses the request's own input mapping.
    fn request_data(&self, _request: &dyn Request) -> Option<Mapping> {
        None
    }

    /// Called after population from a mapping. A returned record replaces
    /// the populated one.
    fn after_mapping(&mut self, _data: &Mapping) -> Option<Self> {
        None
    }

    /// Called after population from a request. A returned record replaces
    /// the populated one.
    fn after_request(&mut self, _request: &dyn Request) -> Option<Self> {
        None
    }
}
