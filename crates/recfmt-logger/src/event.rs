// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Log events and the key/value parser interface.

use crate::LogLevel;
use chrono::{DateTime, Utc};

/// One key/value pair of structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Types that can decompose themselves into key/value pairs for logging.
///
/// This is the facade's parser seam: dispatch is by static type, so each
/// details type carries its own decomposition and the logger never needs a
/// type-to-parser lookup table.
pub trait KeyValues {
    fn key_values(&self) -> Vec<KeyValue>;
}

impl KeyValues for Vec<KeyValue> {
    fn key_values(&self) -> Vec<KeyValue> {
        self.clone()
    }
}

/// A fully assembled log event, handed to the formatter.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub pairs: Vec<KeyValue>,
}

impl LogEvent {
    pub fn new(level: LogLevel, message: impl Into<String>, pairs: Vec<KeyValue>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            pairs,
        }
    }
}
