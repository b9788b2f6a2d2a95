// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! recfmt structured-logging facade
//!
//! Turn a primary message plus key/value pairs into one formatted line and
//! dispatch it to a pluggable sink.
//!
//! # Features
//!
//! - **Structured events**: message + `KeyValue` pairs, or any type
//!   implementing [`KeyValues`]
//! - **Multiple formats**: logfmt (`msg key="value"`), JSON
//! - **Flexible output**: stdout, stderr, file (with rotation)
//! - **Record integration**: render any `recfmt::TextRecord` straight into a
//!   log line
//!
//! # Example
//!
//! ```rust,ignore
//! use recfmt_logger::{LogConfig, LogLevel, OutputFormat, StructuredLogger};
//!
//! let config = LogConfig::builder()
//!     .format(OutputFormat::Logfmt)
//!     .output_file("logs/app.log")
//!     .level(LogLevel::Debug)
//!     .build();
//!
//! let mut logger = StructuredLogger::new(&config)?;
//! logger.log(LogLevel::Info, "service started")?;
//! ```
//!
//! Configuration is explicit: a logger instance carries its formatter and
//! sink as fields. There is no process-wide state.

mod event;
mod formatter;
mod logger;
mod output;

pub use event::{KeyValue, KeyValues, LogEvent};
pub use formatter::{JsonFormatter, LogFormatter, LogfmtFormatter, OutputFormat};
pub use logger::{LoggerError, StructuredLogger, MAX_MESSAGE_LEN};
pub use output::{FileOutput, FileRotation, LogOutput, OutputConfig, StderrOutput, StdoutOutput};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Output configuration.
    pub output: OutputConfig,
    /// Minimum level to emit.
    pub min_level: LogLevel,
}

impl LogConfig {
    /// Create a new builder.
    pub fn builder() -> LogConfigBuilder {
        LogConfigBuilder::default()
    }
}

/// Builder for LogConfig.
#[derive(Debug, Default)]
pub struct LogConfigBuilder {
    format: Option<OutputFormat>,
    output: Option<OutputConfig>,
    min_level: Option<LogLevel>,
}

impl LogConfigBuilder {
    /// Set output format.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set output to file without rotation.
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(OutputConfig::File {
            path: path.into(),
            rotation: None,
        });
        self
    }

    /// Set output to file with rotation.
    pub fn output_file_rotated(mut self, path: impl Into<PathBuf>, rotation: FileRotation) -> Self {
        self.output = Some(OutputConfig::File {
            path: path.into(),
            rotation: Some(rotation),
        });
        self
    }

    /// Set output to stdout.
    pub fn output_stdout(mut self) -> Self {
        self.output = Some(OutputConfig::Stdout);
        self
    }

    /// Set output to stderr.
    pub fn output_stderr(mut self) -> Self {
        self.output = Some(OutputConfig::Stderr);
        self
    }

    /// Set minimum log level.
    pub fn level(mut self, level: LogLevel) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> LogConfig {
        LogConfig {
            format: self.format.unwrap_or_default(),
            output: self.output.unwrap_or_default(),
            min_level: self.min_level.unwrap_or_default(),
        }
    }
}

/// Log severity level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Fixed-width level name for formatted output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = LogConfig::builder().build();
        assert_eq!(config.format, OutputFormat::Logfmt);
        assert!(matches!(config.output, OutputConfig::Stdout));
        assert_eq!(config.min_level, LogLevel::Info);
    }

    #[test]
    fn test_builder_file_output() {
        let config = LogConfig::builder()
            .format(OutputFormat::Json)
            .output_file("logs/app.log")
            .level(LogLevel::Debug)
            .build();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.min_level, LogLevel::Debug);
        match config.output {
            OutputConfig::File { path, rotation } => {
                assert_eq!(path, PathBuf::from("logs/app.log"));
                assert!(rotation.is_none());
            }
            other => panic!("expected file output, got {other:?}"),
        }
    }

    #[test]
    fn test_file_sink_reachable_from_crate_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("app.log");

        let sink = crate::FileOutput::open(&path, None).unwrap();
        let mut logger = StructuredLogger::from_parts(
            Box::new(LogfmtFormatter::bare()),
            Box::new(sink),
            LogLevel::Info,
        );
        logger.log(LogLevel::Info, "service started").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "service started\n");
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
