// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The structured logger: formatter + sink behind one instance.

use crate::event::{KeyValue, KeyValues, LogEvent};
use crate::formatter::{create_formatter, LogFormatter};
use crate::output::{create_output, LogOutput};
use crate::{LogConfig, LogLevel};
use recfmt::TextRecord;
use std::io;
use thiserror::Error;

/// Maximum accepted message length in bytes; longer messages are cut at a
/// character boundary and tagged with a truncation marker.
pub const MAX_MESSAGE_LEN: usize = 1024;

const TRUNCATION_MARKER: &str = "...(msg_truncated)";

/// Buffer size for rendering a `TextRecord` into a log line.
const RECORD_BUF_LEN: usize = 1024;

/// Logger error.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

/// A logger instance carrying its formatter and sink as fields.
///
/// No process-wide state: construct one from a `LogConfig` (or from explicit
/// parts) and pass it where it is needed.
pub struct StructuredLogger {
    formatter: Box<dyn LogFormatter + Send + Sync>,
    output: Box<dyn LogOutput>,
    min_level: LogLevel,
}

impl StructuredLogger {
    /// Build a logger from configuration.
    pub fn new(config: &LogConfig) -> Result<Self, LoggerError> {
        Ok(Self {
            formatter: create_formatter(config.format),
            output: create_output(&config.output)?,
            min_level: config.min_level,
        })
    }

    /// Build a logger from explicit strategy instances.
    pub fn from_parts(
        formatter: Box<dyn LogFormatter + Send + Sync>,
        output: Box<dyn LogOutput>,
        min_level: LogLevel,
    ) -> Self {
        Self {
            formatter,
            output,
            min_level,
        }
    }

    /// Log a plain message.
    pub fn log(&mut self, level: LogLevel, message: &str) -> Result<(), LoggerError> {
        self.log_kv(level, message, &[])
    }

    /// Log a message with structured key/value pairs.
    pub fn log_kv(
        &mut self,
        level: LogLevel,
        message: &str,
        pairs: &[KeyValue],
    ) -> Result<(), LoggerError> {
        if level < self.min_level {
            return Ok(());
        }

        let event = LogEvent::new(level, cap_message(message), pairs.to_vec());
        let line = self.formatter.format(&event);
        self.output.write(&line)?;
        self.output.flush()?;
        Ok(())
    }

    /// Log a message with optional structured details.
    ///
    /// `None` logs the message alone; absent details are not an error.
    pub fn log_details<E: KeyValues>(
        &mut self,
        level: LogLevel,
        message: &str,
        details: Option<&E>,
    ) -> Result<(), LoggerError> {
        let pairs = details.map(KeyValues::key_values).unwrap_or_default();
        self.log_kv(level, message, &pairs)
    }

    /// Log a message with a record rendered through its `to_text` serializer.
    ///
    /// The record's space-joined `name=value` fragments are appended to the
    /// message under the `name` prefix. If the record does not fit the
    /// rendering buffer, the valid truncated portion is logged and the loss
    /// is reported through tracing.
    pub fn log_record<T: TextRecord>(
        &mut self,
        level: LogLevel,
        message: &str,
        name: &str,
        record: &T,
    ) -> Result<(), LoggerError> {
        if level < self.min_level {
            return Ok(());
        }

        let mut buffer = [0u8; RECORD_BUF_LEN];
        let rendered = match record.to_text(&mut buffer, name) {
            Ok(len) => std::str::from_utf8(&buffer[..len])
                .unwrap_or_default()
                .to_string(),
            Err(err) => {
                tracing::warn!(%err, prefix = name, "record rendering truncated");
                let end = buffer.iter().position(|&b| b == 0).unwrap_or(0);
                String::from_utf8_lossy(&buffer[..end]).into_owned()
            }
        };

        let mut line = cap_message(message);
        if !rendered.is_empty() {
            if !line.is_empty() && !line.ends_with(' ') {
                line.push(' ');
            }
            line.push_str(&rendered);
        }

        let event = LogEvent::new(level, line, Vec::new());
        let formatted = self.formatter.format(&event);
        self.output.write(&formatted)?;
        self.output.flush()?;
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<(), LoggerError> {
        self.output.flush()?;
        Ok(())
    }
}

/// Cap a message at `MAX_MESSAGE_LEN`, marking the cut.
fn cap_message(message: &str) -> String {
    if message.len() <= MAX_MESSAGE_LEN {
        return message.to_string();
    }

    let mut cut = MAX_MESSAGE_LEN;
    while !message.is_char_boundary(cut) {
        cut -= 1;
    }
    let mut capped = message[..cut].to_string();
    capped.push_str(TRUNCATION_MARKER);
    capped
}
