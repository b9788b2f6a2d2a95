// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # recfmt - Field-driven record-to-text serialization
//!
//! Declare a record type, derive `TextRecord`, and render any instance as a
//! bounded, space-joined `name=value` line, nested records included, with
//! dotted field paths and strict truncation semantics.
//!
//! ## Quick Start
//!
//! ```rust
//! use recfmt::TextRecord;
//!
//! #[derive(TextRecord)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let point = Point { x: 10, y: 20 };
//! let mut buffer = [0u8; 64];
//! let len = point.to_text(&mut buffer, "mypoint").unwrap();
//! assert_eq!(&buffer[..len], b"mypoint.x=10 mypoint.y=20");
//! ```
//!
//! ## Output grammar
//!
//! ```text
//! line     = fragment (" " fragment)*
//! fragment = full_name "=" value
//! full_name = field_name | prefix "." field_name
//! ```
//!
//! Nested record fields inline their own fragment list under the extended
//! prefix; there are no delimiting braces or parentheses.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TextRecord`] | Serialization contract; derivable or hand-implemented |
//! | [`TextCursor`] | Bounded write cursor enforcing atomic fragments |
//! | [`RecordDescriptor`] | Static per-type field metadata |
//! | [`TextError`] | Single truncation error channel |
//!
//! ## Guarantees
//!
//! - Output is NUL-terminated within capacity after every call, success or
//!   truncation, unless capacity is 0.
//! - A fragment is written atomically or not at all; no partial field values
//!   ever appear in the buffer.
//! - An absent record ([`to_text`] with `None`) renders as the empty string
//!   and succeeds.
//! - No allocation into the destination: the serializer only writes within
//!   the caller-owned buffer.

// Allow the derive macro to work inside this crate's tests
extern crate self as recfmt;

/// Static field-descriptor metadata (`RecordDescriptor`, `FieldDescriptor`).
pub mod descriptor;
/// The `TextRecord` trait and prefix composition helpers.
pub mod record;
/// Bounded text cursor, truncation errors, value escaping.
pub mod text;

pub use descriptor::{FieldDescriptor, FieldKind, PrimitiveKind, RecordDescriptor};
pub use record::{qualified_name, to_text, TextRecord};
pub use text::{escape_quoted, TextCursor, TextError, TextResult};

pub use recfmt_codegen::TextRecord; // Derive macro (for #[derive(recfmt::TextRecord)])
