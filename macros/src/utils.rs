//! Utility functions for procedural macros
//!
//! Type inspection and attribute parsing helpers used by the `Record`
//! derive.

use darling::ast::NestedMeta;
use darling::{Error, FromMeta};
use syn::{GenericArgument, Lit, Meta, PathArguments, Type};

/// A list of field names, written as `keys(name, mime)` or
/// `keys("name", "mime")`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList(pub Vec<String>);

impl FromMeta for NameList {
    fn from_list(items: &[NestedMeta]) -> darling::Result<Self> {
        let mut errors = Error::accumulator();
        let names = items
            .iter()
            .filter_map(|item| {
                errors.handle(match item {
                    NestedMeta::Lit(Lit::Str(s)) => Ok(s.value()),
                    NestedMeta::Meta(Meta::Path(path)) => path
                        .get_ident()
                        .map(ToString::to_string)
                        .ok_or_else(|| Error::custom("expected a field name").with_span(path)),
                    other => Err(Error::custom("expected a field name").with_span(other)),
                })
            })
            .collect();
        errors.finish_with(Self(names))
    }
}

/// The `T` of a `Slot<T>` field type
pub fn slot_inner_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Slot" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}
