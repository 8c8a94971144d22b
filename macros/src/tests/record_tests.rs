//! Tests for the Record derive macro
//!
//! Expansion is checked on the generated tokens; behaviour of the derived
//! impls is covered by the integration tests of the main crate.

use syn::{DeriveInput, parse_quote};

use crate::record_impl::expand;

fn expanded(input: &DeriveInput) -> String {
    expand(input).unwrap().to_string()
}

#[test]
fn test_expands_schema_and_accessors() {
    let input: DeriveInput = parse_quote! {
        #[record(keys(name, mime), files("file"))]
        struct ImageDto {
            name: Slot<String>,
            #[field(alias = "mime_type")]
            mime: Slot<String>,
            #[field(name = "userId")]
            user_id: Slot<Option<i64>>,
        }
    };
    let code = expanded(&input);

    assert!(code.contains("impl :: dto_kit :: Record for ImageDto"));
    assert!(code.contains("builder (\"ImageDto\")"));
    assert!(code.contains("with_alias (\"mime_type\")"));
    assert!(code.contains("\"userId\" => self . user_id . is_set ()"));
    assert!(code.contains(". keys (& [\"name\" , \"mime\"])"));
    assert!(code.contains(". files (& [\"file\"])"));
    assert!(code.contains("pub fn with_user_id"));
    assert!(code.contains("impl :: dto_kit :: RecordHooks for ImageDto"));
}

#[test]
fn test_hooks_flag_skips_empty_hooks_impl() {
    let input: DeriveInput = parse_quote! {
        #[record(hooks, name = "Example")]
        struct ExampleRecord {
            name: Slot<String>,
        }
    };
    let code = expanded(&input);
    assert!(!code.contains("RecordHooks"));
    assert!(code.contains("builder (\"Example\")"));
}

#[test]
fn test_extra_and_skip_fields() {
    let input: DeriveInput = parse_quote! {
        struct Loose {
            name: Slot<String>,
            #[field(extra)]
            extra: ObjectMap,
            #[field(skip)]
            cache: Vec<u8>,
        }
    };
    let code = expanded(&input);
    assert!(code.contains(". extra (\"extra\")"));
    assert!(code.contains("fn extra_mut"));
    assert!(!code.contains("cache"));
}

#[test]
fn test_rejects_non_slot_field() {
    let input: DeriveInput = parse_quote! {
        struct Broken {
            name: String,
        }
    };
    let err = expand(&input).unwrap_err();
    assert!(err.to_string().contains("Slot<T>"));
}

#[test]
fn test_rejects_duplicate_names() {
    let input: DeriveInput = parse_quote! {
        struct Twice {
            name: Slot<String>,
            #[field(name = "name")]
            other: Slot<String>,
        }
    };
    let err = expand(&input).unwrap_err();
    assert!(err.to_string().contains("duplicate field name"));
}

#[test]
fn test_rejects_generics() {
    let input: DeriveInput = parse_quote! {
        struct Wrapper<T> {
            value: Slot<T>,
        }
    };
    assert!(expand(&input).is_err());
}

#[test]
fn test_rejects_enums() {
    let input: DeriveInput = parse_quote! {
        enum NotARecord { A, B }
    };
    assert!(expand(&input).is_err());
}
