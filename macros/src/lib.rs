//! Procedural macros for the dto-kit crate
//!
//! This crate provides the `Record` derive, which generates a record's
//! schema and its name-based field accessors from a struct definition.

use proc_macro::TokenStream;

// Import modules
mod record_impl;
mod utils;

// Tests
#[cfg(test)]
mod tests;

/// Derive macro for records
///
/// Every field must be a `Slot<T>` where `T` implements `FieldValue`,
/// unless it is marked `#[field(extra)]` (an `ObjectMap` receiving forced
/// properties) or `#[field(skip)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Default, Record)]
/// #[record(keys(name, mime), files(file))]
/// struct ImageDto {
///     name: Slot<String>,
///
///     #[field(alias = "mime_type")]
///     mime: Slot<String>,
///
///     #[field(name = "userId")]
///     user_id: Slot<Option<i64>>,
///
///     file: Slot<Option<UploadedFile>>,
/// }
/// ```
///
/// Records providing their own `RecordHooks` impl opt out of the generated
/// empty one with `#[record(hooks)]`.
#[proc_macro_derive(Record, attributes(record, field))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record_impl::process_derive_record(input)
}
