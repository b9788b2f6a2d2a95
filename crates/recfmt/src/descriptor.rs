// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Static field-descriptor metadata for record types.
//!
//! Defines `RecordDescriptor` and `FieldDescriptor` describing a record's
//! ordered field list at compile time. Emitted by `#[derive(TextRecord)]`;
//! hand-written implementations declare theirs directly. There is no runtime
//! registry: descriptors are plain statics reachable only through the type.

/// Field kind classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Directly formatted value
    Primitive(PrimitiveKind),
    /// Nested record, recursively formatted under a dotted prefix
    Struct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Bool,
    Char,
    Str,
}

/// Descriptor for a single field (compile-time metadata)
///
/// Exactly one of `nested_type` / `format` is active, selected by `kind`:
/// `nested_type` names the delegate record type for `Struct` fields,
/// `format` carries the optional value format spec for `Primitive` fields.
#[derive(Debug)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub nested_type: Option<&'static str>,
    pub format: Option<&'static str>,
}

/// Record descriptor: the ordered field list of one record type
#[derive(Debug)]
pub struct RecordDescriptor {
    pub record_name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl RecordDescriptor {
    pub const fn new(record_name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self {
            record_name,
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static POINT_FIELDS: [FieldDescriptor; 2] = [
        FieldDescriptor {
            name: "x",
            kind: FieldKind::Primitive(PrimitiveKind::I32),
            nested_type: None,
            format: None,
        },
        FieldDescriptor {
            name: "y",
            kind: FieldKind::Primitive(PrimitiveKind::I32),
            nested_type: None,
            format: None,
        },
    ];

    #[test]
    fn test_descriptor_preserves_declaration_order() {
        let descriptor = RecordDescriptor::new("Point", &POINT_FIELDS);
        let names: Vec<_> = descriptor.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, ["x", "y"]);
        assert_eq!(descriptor.record_name, "Point");
    }
}
