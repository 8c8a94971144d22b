//! Record derive macro implementation
//!
//! This module generates the `Record` impl: the schema, built once behind a
//! `OnceLock`, plus match-based `get`/`put`/`is_set` over the declared
//! fields and typed `with_<field>` helpers.

use std::collections::HashSet;

use darling::util::Flag;
use darling::{FromDeriveInput, FromField, ast};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{DeriveInput, parse_macro_input};

use crate::utils::{NameList, slot_inner_type};

/// Receiver for the struct that derives `Record`
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
pub struct RecordReceiver {
    /// The struct identifier
    ident: syn::Ident,
    generics: syn::Generics,
    /// Record name used in the schema and in errors
    #[darling(default)]
    name: Option<String>,
    /// Inclusion list
    #[darling(default)]
    only: NameList,
    /// Exclusion list
    #[darling(default)]
    exclude: NameList,
    /// File fields
    #[darling(default)]
    files: NameList,
    /// Fields returned by `compact_data`
    #[darling(default)]
    keys: NameList,
    /// The record implements `RecordHooks` itself
    hooks: Flag,
    data: ast::Data<(), RecordFieldReceiver>,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(attributes(field))]
pub struct RecordFieldReceiver {
    ident: Option<syn::Ident>,
    ty: syn::Type,
    /// Schema name, defaulting to the Rust identifier
    #[darling(default)]
    name: Option<String>,
    #[darling(multiple)]
    alias: Vec<String>,
    #[darling(default)]
    description: Option<String>,
    /// Store for forced undeclared properties
    extra: Flag,
    /// Not part of the schema
    skip: Flag,
}

/// A schema field, ready for code generation
struct SchemaField<'a> {
    ident: &'a syn::Ident,
    inner: &'a syn::Type,
    name: String,
    description: String,
    aliases: &'a [String],
}

/// Process the Record derive macro
pub fn process_derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.write_errors()),
    }
}

/// Expand the derive for a parsed struct
pub fn expand(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let receiver = RecordReceiver::from_derive_input(input)?;

    if !receiver.generics.params.is_empty() {
        return Err(darling::Error::custom("Record cannot be derived for generic structs")
            .with_span(&receiver.generics));
    }

    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("Darling ensures this is a struct")
    };

    let mut errors = darling::Error::accumulator();
    let mut schema_fields = Vec::new();
    let mut extra_field = None;
    let mut seen = HashSet::new();

    for field in fields.iter() {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        if field.skip.is_present() {
            continue;
        }
        if field.extra.is_present() {
            if extra_field.replace(ident).is_some() {
                errors.push(
                    darling::Error::custom("only one field may be marked extra").with_span(ident),
                );
            }
            continue;
        }

        let Some(inner) = slot_inner_type(&field.ty) else {
            errors.push(
                darling::Error::custom(
                    "record fields must be Slot<T>; mark other fields #[field(skip)] or #[field(extra)]",
                )
                .with_span(&field.ty),
            );
            continue;
        };

        let name = field
            .name
            .clone()
            .unwrap_or_else(|| ident.unraw().to_string());
        if !seen.insert(name.clone()) {
            errors.push(
                darling::Error::custom(format!("duplicate field name `{name}`")).with_span(ident),
            );
            continue;
        }

        schema_fields.push(SchemaField {
            ident,
            inner,
            name,
            description: field.description.clone().unwrap_or_default(),
            aliases: &field.alias,
        });
    }

    errors.finish()?;

    let struct_name = &receiver.ident;
    let record_name = receiver
        .name
        .clone()
        .unwrap_or_else(|| struct_name.unraw().to_string());

    let schema_fn = generate_schema(&receiver, &record_name, &schema_fields, extra_field);
    let accessors = generate_accessors(&record_name, &schema_fields, extra_field);
    let helpers = generate_with_helpers(&schema_fields);

    let hooks = if receiver.hooks.is_present() {
        quote! {}
    } else {
        quote! { impl ::dto_kit::RecordHooks for #struct_name {} }
    };

    Ok(quote! {
        impl ::dto_kit::Record for #struct_name {
            #schema_fn
            #accessors
        }

        #hooks

        impl #struct_name {
            #helpers
        }
    })
}

fn generate_schema(
    receiver: &RecordReceiver,
    record_name: &str,
    fields: &[SchemaField<'_>],
    extra: Option<&syn::Ident>,
) -> TokenStream2 {
    let definitions = fields.iter().map(|field| {
        let inner = field.inner;
        let name = &field.name;
        let description = &field.description;
        let aliases = field.aliases.iter();
        quote! {
            .field(
                ::dto_kit::FieldDefinition::new(
                    #name,
                    #description,
                    <#inner as ::dto_kit::FieldValue>::FIELD_TYPE,
                    <#inner as ::dto_kit::FieldValue>::NULLABLE,
                )
                #(.with_alias(#aliases))*
            )
        }
    });

    let only = &receiver.only.0;
    let exclude = &receiver.exclude.0;
    let files = &receiver.files.0;
    let keys = &receiver.keys.0;
    let extra = extra.map(|ident| {
        let name = ident.unraw().to_string();
        quote! { .extra(#name) }
    });

    quote! {
        fn schema() -> &'static ::dto_kit::RecordSchema {
            static SCHEMA: ::std::sync::OnceLock<::dto_kit::RecordSchema> =
                ::std::sync::OnceLock::new();
            SCHEMA.get_or_init(|| {
                ::dto_kit::RecordSchema::builder(#record_name)
                    #(#definitions)*
                    .only(&[#(#only),*])
                    .exclude(&[#(#exclude),*])
                    .files(&[#(#files),*])
                    .keys(&[#(#keys),*])
                    #extra
                    .build()
            })
        }
    }
}

fn generate_accessors(
    record_name: &str,
    fields: &[SchemaField<'_>],
    extra: Option<&syn::Ident>,
) -> TokenStream2 {
    let names: Vec<_> = fields.iter().map(|field| &field.name).collect();
    let idents: Vec<_> = fields.iter().map(|field| field.ident).collect();
    let inners: Vec<_> = fields.iter().map(|field| field.inner).collect();

    let extra_methods = extra.map(|ident| {
        quote! {
            fn extra(&self) -> Option<&::dto_kit::ObjectMap> {
                Some(&self.#ident)
            }

            fn extra_mut(&mut self) -> Option<&mut ::dto_kit::ObjectMap> {
                Some(&mut self.#ident)
            }
        }
    });

    quote! {
        fn get(&self, field: &str) -> Option<::dto_kit::Value> {
            match field {
                #(#names => self.#idents.get().map(<#inners as ::dto_kit::FieldValue>::to_value),)*
                _ => None,
            }
        }

        fn put(&mut self, field: &str, value: ::dto_kit::Value) -> ::dto_kit::Result<()> {
            match field {
                #(#names => {
                    self.#idents.set(<#inners as ::dto_kit::FieldValue>::from_value(value)?);
                    Ok(())
                })*
                _ => Err(::dto_kit::DtoError::property_not_found(#record_name, field)),
            }
        }

        fn is_set(&self, field: &str) -> bool {
            match field {
                #(#names => self.#idents.is_set(),)*
                _ => false,
            }
        }

        #extra_methods
    }
}

fn generate_with_helpers(fields: &[SchemaField<'_>]) -> TokenStream2 {
    let helpers = fields.iter().map(|field| {
        let name = &field.name;
        let method = format_ident!("with_{}", field.ident.unraw());
        let doc = format!(" A copy of this record with `{name}` reassigned");
        quote! {
            #[doc = #doc]
            pub fn #method(
                &self,
                populator: &::dto_kit::Populator,
                value: impl Into<::dto_kit::Value>,
            ) -> ::dto_kit::Result<Self> {
                populator.with(self, #name, value)
            }
        }
    });

    quote! { #(#helpers)* }
}
