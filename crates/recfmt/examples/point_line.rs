// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Render nested records as `name=value` text.
//!
//! Run with: `cargo run --example point_line`

use recfmt::{to_text, TextRecord};

#[derive(TextRecord)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(TextRecord)]
struct Line {
    start: Point,
    end: Point,
    label: String,
}

fn main() {
    let line = Line {
        start: Point { x: 10, y: 20 },
        end: Point { x: 30, y: 40 },
        label: "MainLine".to_string(),
    };

    let mut buffer = [0u8; 256];

    let len = line.to_text(&mut buffer, "myline").expect("buffer too small");
    println!("len {len}: {}", String::from_utf8_lossy(&buffer[..len]));

    // Absent records render as the empty string, not an error
    let len = to_text(None::<&Line>, &mut buffer, "myline").expect("never fails");
    println!("absent record renders {len} bytes");

    // Truncation is atomic: the last full fragment survives, nothing partial
    let mut small = [0u8; 25];
    let point = Point { x: 10, y: 20 };
    if point.to_text(&mut small, "mypoint").is_err() {
        let end = small.iter().position(|&b| b == 0).unwrap_or(0);
        println!(
            "truncated, valid prefix: {:?}",
            String::from_utf8_lossy(&small[..end])
        );
    }
}
