// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The `TextRecord` contract: record types renderable as bounded
//! `name=value` text.
//!
//! Generated (`#[derive(TextRecord)]`) and hand-written implementations meet
//! the same contract and compose transparently: a generated parent delegates
//! a nested field through the trait bound without knowing which kind of
//! implementation it reaches.

use crate::descriptor::RecordDescriptor;
use crate::text::{TextCursor, TextResult};

/// A record type serializable into space-joined `name=value` fragments.
///
/// Contract (honored by generated and custom implementations alike):
/// - Fields are emitted in declaration order, separated by single spaces.
/// - Leaf names are qualified by the dotted prefix: empty prefix yields the
///   bare field name, otherwise `prefix.field`.
/// - Nested record fields delegate to the field type's own `write_fields`
///   with the qualified name as the new prefix.
/// - Each fragment is written atomically; the first fragment that does not
///   fit aborts the whole call with `TextError::Truncated`, leaving the
///   buffer NUL-terminated at the last safe position.
pub trait TextRecord {
    /// Static field-descriptor list for this record type.
    fn descriptor() -> &'static RecordDescriptor
    where
        Self: Sized;

    /// Append this record's fragments to the cursor under `prefix`.
    fn write_fields(&self, out: &mut TextCursor<'_>, prefix: &str) -> TextResult<()>;

    /// Serialize into `buffer`, returning the number of bytes written
    /// (terminator excluded). The buffer is NUL-terminated within capacity
    /// on success and on truncation, unless capacity is 0.
    fn to_text(&self, buffer: &mut [u8], prefix: &str) -> TextResult<usize> {
        let mut cursor = TextCursor::new(buffer);
        self.write_fields(&mut cursor, prefix)?;
        cursor.finish()
    }
}

/// Serialize an optional record.
///
/// `None` renders as the empty string and returns `Ok(0)`; absent records
/// are defined output, never an error. Truncation is the only failure.
pub fn to_text<T: TextRecord>(
    record: Option<&T>,
    buffer: &mut [u8],
    prefix: &str,
) -> TextResult<usize> {
    match record {
        Some(record) => record.to_text(buffer, prefix),
        None => {
            if let Some(first) = buffer.first_mut() {
                *first = 0;
            }
            Ok(0)
        }
    }
}

/// Compose the qualified field name for `prefix`.
///
/// An empty prefix yields the bare field name with no leading dot.
pub fn qualified_name(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}
