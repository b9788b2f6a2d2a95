// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Write cursor for bounded `name=value` text output.
//!

use super::{TextError, TextResult};

/// Bounded write cursor over a caller-owned byte buffer.
///
/// One byte of capacity is always reserved for the NUL terminator, so a
/// fragment of length `n` fits only while `offset + n < capacity`. Fragments
/// are atomic: on overflow nothing of the fragment is written and the buffer
/// is terminated at the current offset, leaving every previously written
/// fragment (and any trailing separator) intact.
pub struct TextCursor<'a> {
    buffer: &'a mut [u8],
    offset: usize,
}

impl<'a> TextCursor<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes still usable for fragments (terminator slot excluded).
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset + 1)
    }

    /// Write one fragment atomically.
    ///
    /// On overflow the fragment is not written at all; the buffer is
    /// NUL-terminated at the current offset and `TextError::Truncated` is
    /// returned.
    pub fn write_fragment(&mut self, fragment: &str) -> TextResult<()> {
        let bytes = fragment.as_bytes();
        if self.offset + bytes.len() >= self.buffer.len() {
            self.terminate();
            return Err(TextError::Truncated {
                offset: self.offset,
                needed: bytes.len(),
            });
        }
        self.buffer[self.offset..self.offset + bytes.len()].copy_from_slice(bytes);
        self.offset += bytes.len();
        Ok(())
    }

    /// Write the single-space field separator (an atomic fragment itself).
    pub fn write_separator(&mut self) -> TextResult<()> {
        self.write_fragment(" ")
    }

    /// Terminate the output and return the number of bytes written,
    /// excluding the terminator.
    pub fn finish(mut self) -> TextResult<usize> {
        self.terminate();
        Ok(self.offset)
    }

    /// Place the NUL terminator at the current offset.
    ///
    /// Successful fragment writes keep `offset < capacity`, so the slot is
    /// always available; a zero-capacity buffer is the only case where
    /// nothing is written.
    fn terminate(&mut self) {
        if self.offset < self.buffer.len() {
            self.buffer[self.offset] = 0;
        }
    }
}
