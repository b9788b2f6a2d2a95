// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structured logging with key/value pairs and record rendering.
//!
//! Run with: `cargo run --example structured`

use recfmt::TextRecord;
use recfmt_logger::{KeyValue, LogConfig, LogLevel, LoggerError, StructuredLogger};

#[derive(TextRecord)]
struct Point {
    x: i32,
    y: i32,
}

fn main() -> Result<(), LoggerError> {
    let config = LogConfig::builder().level(LogLevel::Debug).build();
    let mut logger = StructuredLogger::new(&config)?;

    logger.log(LogLevel::Info, "service started")?;

    logger.log_kv(
        LogLevel::Warn,
        "disk usage high",
        &[
            KeyValue::new("device", "/dev/sda1"),
            KeyValue::new("usage", "93%"),
        ],
    )?;

    let point = Point { x: 10, y: 20 };
    logger.log_record(LogLevel::Info, "position update", "mypoint", &point)?;

    Ok(())
}
