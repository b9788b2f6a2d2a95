// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shared helpers for the integration suites.

/// Text up to the NUL terminator.
pub fn terminated(buffer: &[u8]) -> &str {
    let end = buffer
        .iter()
        .position(|&b| b == 0)
        .expect("buffer should be NUL-terminated");
    std::str::from_utf8(&buffer[..end]).expect("output should be valid UTF-8")
}

/// Assert two rendered lines are identical, reporting the first mismatch
/// with surrounding context when they are not.
#[track_caller]
pub fn assert_same_text(actual: &str, expected: &str) {
    if actual == expected {
        return;
    }

    let mismatch = actual
        .bytes()
        .zip(expected.bytes())
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| actual.len().min(expected.len()));

    let context = |s: &str| -> String {
        let start = mismatch.saturating_sub(10);
        let end = (mismatch + 10).min(s.len());
        String::from_utf8_lossy(&s.as_bytes()[start..end]).into_owned()
    };

    panic!(
        "text mismatch at byte {mismatch}:\n  \
         actual   (len {:>3}): {actual:?}\n  \
         expected (len {:>3}): {expected:?}\n  \
         actual context:   {:?}\n  \
         expected context: {:?}",
        actual.len(),
        expected.len(),
        context(actual),
        context(expected),
    );
}
