// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Log formatters: logfmt, JSON.

use crate::LogEvent;
use serde::{Deserialize, Serialize};

/// Output format for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// logfmt style: `message key="value"` (human-readable).
    #[default]
    Logfmt,
    /// JSON format (one object per line, structured logging ready).
    Json,
}

/// Log formatter trait.
pub trait LogFormatter {
    /// Format a log event to a single line.
    fn format(&self, event: &LogEvent) -> String;
}

/// logfmt formatter for human-readable output.
///
/// Values are always quoted, with `"` and `\` escaped. Quoting here is
/// unconditional so downstream logfmt parsers never see a bare delimiter.
#[derive(Debug, Clone)]
pub struct LogfmtFormatter {
    /// Include timestamp.
    pub show_timestamp: bool,
    /// Include level tag.
    pub show_level: bool,
}

impl Default for LogfmtFormatter {
    fn default() -> Self {
        Self {
            show_timestamp: true,
            show_level: true,
        }
    }
}

impl LogfmtFormatter {
    /// Create formatter with message and pairs only.
    pub fn bare() -> Self {
        Self {
            show_timestamp: false,
            show_level: false,
        }
    }
}

impl LogFormatter for LogfmtFormatter {
    fn format(&self, event: &LogEvent) -> String {
        let mut line = String::new();

        if self.show_timestamp {
            line.push_str(&event.timestamp.format("%Y-%m-%d %H:%M:%S%.3f").to_string());
            line.push(' ');
        }

        if self.show_level {
            line.push_str(&format!("[{:5}] ", event.level.as_str()));
        }

        line.push_str(&event.message);

        for pair in &event.pairs {
            // No duplicate separator when the message already ends with one
            if !line.is_empty() && !line.ends_with(' ') {
                line.push(' ');
            }
            line.push_str(&pair.key);
            line.push('=');
            line.push_str(&recfmt::escape_quoted(&pair.value));
        }

        line
    }
}

/// JSON formatter for structured logging.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Pretty print JSON.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create compact JSON formatter.
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

/// JSON log entry structure.
#[derive(Debug, Serialize)]
struct JsonLogEntry<'a> {
    #[serde(rename = "@timestamp")]
    timestamp: String,
    level: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<JsonPair<'a>>,
    source: &'static str,
}

/// Pair serialized as an array element to preserve declaration order.
#[derive(Debug, Serialize)]
struct JsonPair<'a> {
    key: &'a str,
    value: &'a str,
}

impl LogFormatter for JsonFormatter {
    fn format(&self, event: &LogEvent) -> String {
        let json_entry = JsonLogEntry {
            timestamp: event.timestamp.to_rfc3339(),
            level: event.level.as_str(),
            message: &event.message,
            fields: event
                .pairs
                .iter()
                .map(|p| JsonPair {
                    key: &p.key,
                    value: &p.value,
                })
                .collect(),
            source: "recfmt-logger",
        };

        if self.pretty {
            serde_json::to_string_pretty(&json_entry).unwrap_or_else(|_| event.message.clone())
        } else {
            serde_json::to_string(&json_entry).unwrap_or_else(|_| event.message.clone())
        }
    }
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn LogFormatter + Send + Sync> {
    match format {
        OutputFormat::Logfmt => Box::new(LogfmtFormatter::default()),
        OutputFormat::Json => Box::new(JsonFormatter::compact()),
    }
}
