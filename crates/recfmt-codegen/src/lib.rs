// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr, Type};

/// Field kind for code generation
#[derive(Clone)]
enum FieldKind {
    /// Directly formatted scalar or string type
    Primitive {
        kind_tokens: proc_macro2::TokenStream,
    },
    /// Nested record type (delegated through the `TextRecord` bound)
    Record { type_name: String },
}

/// Per-field options parsed from `#[text(...)]` attributes
#[derive(Default)]
struct FieldOptions {
    /// Custom value format spec, e.g. `#[text(format = "{:x}")]`
    format: Option<LitStr>,
    /// Quote and escape the value, e.g. `#[text(escape)]` (string fields only)
    escape: bool,
}

/// `#[derive(TextRecord)]` macro: generates `RecordDescriptor` + `write_fields` impl
///
/// Walks the struct's named fields in declaration order and emits a
/// `recfmt::TextRecord` implementation producing space-joined `name=value`
/// fragments, with nested record fields delegated to their own
/// implementation under a dotted name prefix.
///
/// Supports:
/// - Primitive types: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool, char
/// - String types: String, &str
/// - Nested records: any other path type implementing `TextRecord`
///
/// Field attributes:
/// - `#[text(format = "{:x}")]`: custom value format spec (primitives only)
/// - `#[text(escape)]`: render the value quoted with `"` and `\` escaped
///   (string fields only; never applied implicitly)
///
/// # Panics
///
/// Never panics; unsupported shapes (enums, tuple structs, generics,
/// collection-typed fields) become compile errors.
///
/// Example:
/// ```ignore
/// use recfmt::TextRecord;
///
/// #[derive(TextRecord)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// #[derive(TextRecord)]
/// struct Line {
///     start: Point,        // Nested record: start.x=.. start.y=..
///     end: Point,
///     label: String,
/// }
/// ```
#[proc_macro_derive(TextRecord, attributes(text))]
pub fn derive_text_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let record_name = name.to_string();

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "Generic records are not supported")
            .to_compile_error()
            .into();
    }

    // Parse struct fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(f) => &f.named,
            Fields::Unit => {
                // Zero-field record: empty fragment list
                return impl_empty_record(name, &record_name);
            }
            Fields::Unnamed(_) => {
                return syn::Error::new_spanned(&input, "Only named fields are supported")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "Only structs are supported")
                .to_compile_error()
                .into()
        }
    };

    struct FieldInfo {
        name: syn::Ident,
        kind: FieldKind,
        options: FieldOptions,
    }

    let mut field_infos = Vec::new();

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            return syn::Error::new_spanned(field, "Field must have a name")
                .to_compile_error()
                .into();
        };
        let field_type = &field.ty;

        let options = match parse_field_options(field) {
            Ok(opts) => opts,
            Err(err) => return err.to_compile_error().into(),
        };

        let Some(kind) = get_field_kind(field_type) else {
            return syn::Error::new_spanned(
                field_type,
                "Unsupported field type. Supported: primitives, String, &str, \
                 or another record type (collections are not supported).",
            )
            .to_compile_error()
            .into();
        };

        // Attribute validity depends on the resolved kind
        match &kind {
            FieldKind::Primitive { .. } => {
                if options.escape && !is_string_type(field_type) {
                    return syn::Error::new_spanned(
                        field_type,
                        "#[text(escape)] is only valid on String or &str fields",
                    )
                    .to_compile_error()
                    .into();
                }
                if options.escape && options.format.is_some() {
                    return syn::Error::new_spanned(
                        field_type,
                        "#[text(escape)] and #[text(format = ..)] are mutually exclusive",
                    )
                    .to_compile_error()
                    .into();
                }
            }
            FieldKind::Record { .. } => {
                if options.format.is_some() || options.escape {
                    return syn::Error::new_spanned(
                        field_type,
                        "#[text(..)] value options only apply to primitive fields",
                    )
                    .to_compile_error()
                    .into();
                }
            }
        }

        field_infos.push(FieldInfo {
            name: field_name.clone(),
            kind,
            options,
        });
    }

    // Generate descriptor entries (static field metadata, declaration order)
    let field_descriptors: Vec<_> = field_infos
        .iter()
        .map(|f| {
            let name_str = f.name.to_string();
            match &f.kind {
                FieldKind::Primitive { kind_tokens } => {
                    let format_tokens = match &f.options.format {
                        Some(lit) => quote! { ::core::option::Option::Some(#lit) },
                        None => quote! { ::core::option::Option::None },
                    };
                    quote! {
                        ::recfmt::FieldDescriptor {
                            name: #name_str,
                            kind: ::recfmt::FieldKind::Primitive(#kind_tokens),
                            nested_type: ::core::option::Option::None,
                            format: #format_tokens,
                        }
                    }
                }
                FieldKind::Record { type_name } => {
                    quote! {
                        ::recfmt::FieldDescriptor {
                            name: #name_str,
                            kind: ::recfmt::FieldKind::Struct,
                            nested_type: ::core::option::Option::Some(#type_name),
                            format: ::core::option::Option::None,
                        }
                    }
                }
            }
        })
        .collect();

    // Generate one write statement per field, declaration order.
    // Every field except the first is preceded by a separator fragment;
    // both the separator and the `name=value` fragment are atomic, so a
    // fragment that does not fit aborts the whole call via `?`.
    let write_fields: Vec<_> = field_infos
        .iter()
        .enumerate()
        .map(|(idx, f)| {
            let field_name = &f.name;
            let name_str = f.name.to_string();
            let separator = if idx == 0 {
                quote! {}
            } else {
                quote! { out.write_separator()?; }
            };

            match &f.kind {
                FieldKind::Primitive { .. } => {
                    if f.options.escape {
                        quote! {
                            #separator
                            let full_name = ::recfmt::qualified_name(prefix, #name_str);
                            out.write_fragment(&::std::format!(
                                "{}={}",
                                full_name,
                                ::recfmt::text::escape_quoted(&self.#field_name)
                            ))?;
                        }
                    } else {
                        // Build the fragment format literal, e.g. "{}={:x}"
                        let value_spec = f
                            .options
                            .format
                            .as_ref()
                            .map_or_else(|| "{}".to_string(), LitStr::value);
                        let fragment_spec =
                            LitStr::new(&format!("{{}}={value_spec}"), f.name.span());
                        quote! {
                            #separator
                            let full_name = ::recfmt::qualified_name(prefix, #name_str);
                            out.write_fragment(&::std::format!(
                                #fragment_spec,
                                full_name,
                                self.#field_name
                            ))?;
                        }
                    }
                }
                FieldKind::Record { .. } => {
                    quote! {
                        #separator
                        let full_name = ::recfmt::qualified_name(prefix, #name_str);
                        ::recfmt::TextRecord::write_fields(&self.#field_name, out, &full_name)?;
                    }
                }
            }
        })
        .collect();

    let expanded = quote! {
        impl ::recfmt::TextRecord for #name {
            fn descriptor() -> &'static ::recfmt::RecordDescriptor {
                static DESCRIPTOR: ::recfmt::RecordDescriptor = ::recfmt::RecordDescriptor {
                    record_name: #record_name,
                    fields: &[#(#field_descriptors),*],
                };
                &DESCRIPTOR
            }

            fn write_fields(
                &self,
                out: &mut ::recfmt::TextCursor<'_>,
                prefix: &str,
            ) -> ::recfmt::TextResult<()> {
                #(#write_fields)*
                ::core::result::Result::Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}

/// Implementation for unit structs: no fields, empty output
fn impl_empty_record(name: &syn::Ident, record_name: &str) -> TokenStream {
    let expanded = quote! {
        impl ::recfmt::TextRecord for #name {
            fn descriptor() -> &'static ::recfmt::RecordDescriptor {
                static DESCRIPTOR: ::recfmt::RecordDescriptor = ::recfmt::RecordDescriptor {
                    record_name: #record_name,
                    fields: &[],
                };
                &DESCRIPTOR
            }

            fn write_fields(
                &self,
                _out: &mut ::recfmt::TextCursor<'_>,
                _prefix: &str,
            ) -> ::recfmt::TextResult<()> {
                ::core::result::Result::Ok(())
            }
        }
    };
    TokenStream::from(expanded)
}

/// Parse `#[text(format = "..")]` / `#[text(escape)]` attributes on a field
fn parse_field_options(field: &syn::Field) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("text") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("format") {
                let lit: LitStr = meta.value()?.parse()?;
                options.format = Some(lit);
                Ok(())
            } else if meta.path.is_ident("escape") {
                options.escape = true;
                Ok(())
            } else {
                Err(meta.error("Unknown option; expected `format = \"..\"` or `escape`"))
            }
        })?;
    }

    Ok(options)
}

/// Get field kind for a Rust type
///
/// Primitives and string types format directly; any other path type is
/// treated as a nested record and resolved through the `TextRecord` bound,
/// so custom implementations compose with generated ones. Collection types
/// are rejected (there is no field-list entry shape for them).
fn get_field_kind(ty: &Type) -> Option<FieldKind> {
    match ty {
        Type::Path(type_path) => {
            let segment = type_path.path.segments.last()?;
            let ident_str = segment.ident.to_string();

            let primitive = |variant: &str| {
                let variant = syn::Ident::new(variant, segment.ident.span());
                Some(FieldKind::Primitive {
                    kind_tokens: quote! { ::recfmt::PrimitiveKind::#variant },
                })
            };

            match ident_str.as_str() {
                "i8" => primitive("I8"),
                "i16" => primitive("I16"),
                "i32" => primitive("I32"),
                "i64" => primitive("I64"),
                "u8" => primitive("U8"),
                "u16" => primitive("U16"),
                "u32" => primitive("U32"),
                "u64" => primitive("U64"),
                "f32" => primitive("F32"),
                "f64" => primitive("F64"),
                "bool" => primitive("Bool"),
                "char" => primitive("Char"),
                "String" | "str" => primitive("Str"),
                // Collections have no field-descriptor shape
                "Vec" | "Option" | "Box" | "HashMap" | "BTreeMap" | "HashSet" | "BTreeSet" => None,
                _ => Some(FieldKind::Record {
                    type_name: ident_str,
                }),
            }
        }
        // &str (and &'static str) counts as a string primitive
        Type::Reference(reference) => match reference.elem.as_ref() {
            Type::Path(inner) if inner.path.is_ident("str") => Some(FieldKind::Primitive {
                kind_tokens: quote! { ::recfmt::PrimitiveKind::Str },
            }),
            _ => None,
        },
        _ => None,
    }
}

/// True for `String` and `&str` fields (targets of `#[text(escape)]`)
fn is_string_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|s| s.ident == "String" || s.ident == "str"),
        Type::Reference(reference) => {
            matches!(reference.elem.as_ref(), Type::Path(inner) if inner.path.is_ident("str"))
        }
        _ => false,
    }
}
