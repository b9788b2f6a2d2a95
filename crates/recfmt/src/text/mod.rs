// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bounded text buffer primitives for record formatting.
//!
//! `TextCursor` is the single write path for generated and hand-written
//! serializers: it owns the offset/capacity bookkeeping and enforces that
//! every fragment is written atomically or not at all.

pub mod cursor;

pub use cursor::TextCursor;

use std::fmt;

/// Formatting error used within the text serialization path.
///
/// A single channel: callers only need to distinguish success from failure,
/// whether their own fragment overflowed or a nested record's did. The buffer
/// is always left NUL-terminated at the last safe position (capacity
/// permitting) when this is returned.
#[derive(Debug, Clone)]
pub enum TextError {
    Truncated { offset: usize, needed: usize },
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::Truncated { offset, needed } => {
                write!(
                    f,
                    "output truncated at offset {}: fragment of {} bytes does not fit",
                    offset, needed
                )
            }
        }
    }
}

impl std::error::Error for TextError {}

/// Result alias for the text serialization path.
pub type TextResult<T> = Result<T, TextError>;

/// Render a string value quoted, escaping `"` and `\`.
///
/// Escaping is never applied implicitly by the generated path; it is opted
/// into per field via `#[text(escape)]`, and custom serializers or log
/// formatters call this directly.
pub fn escape_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
