// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Log sinks: console streams and size-rotated files.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sink selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub enum OutputConfig {
    /// Write to stdout.
    #[default]
    Stdout,
    /// Write to stderr.
    Stderr,
    /// Write to file with optional rotation.
    File {
        path: PathBuf,
        rotation: Option<FileRotation>,
    },
}

/// Size-based rotation policy for file sinks.
///
/// When an appended line would push the live file past `max_size`, the file
/// is renamed to a timestamped archive beside it (`app.log` becomes
/// `app.20260826-093000.log`) and a fresh file is started. Only the newest
/// `max_files` archives are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRotation {
    /// Size ceiling in bytes for the live file.
    pub max_size: u64,
    /// How many archives to retain.
    pub max_files: usize,
}

impl Default for FileRotation {
    fn default() -> Self {
        Self {
            max_size: 10 * 1024 * 1024, // 10 MB
            max_files: 5,
        }
    }
}

impl FileRotation {
    /// Create rotation config with size in megabytes.
    pub fn with_max_size_mb(mb: u64) -> Self {
        Self {
            max_size: mb * 1024 * 1024,
            ..Default::default()
        }
    }

    /// Set how many archives to retain.
    pub fn max_files(mut self, count: usize) -> Self {
        self.max_files = count;
        self
    }
}

/// Log output trait.
pub trait LogOutput: Send {
    /// Write a formatted log line.
    fn write(&mut self, line: &str) -> io::Result<()>;

    /// Flush output.
    fn flush(&mut self) -> io::Result<()>;
}

/// Stdout sink. Takes the handle lock per line, so no handle is stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutput;

impl LogOutput for StdoutOutput {
    fn write(&mut self, line: &str) -> io::Result<()> {
        let mut handle = io::stdout().lock();
        handle.write_all(line.as_bytes())?;
        handle.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}

/// Stderr sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrOutput;

impl LogOutput for StderrOutput {
    fn write(&mut self, line: &str) -> io::Result<()> {
        let mut handle = io::stderr().lock();
        handle.write_all(line.as_bytes())?;
        handle.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().lock().flush()
    }
}

/// Buffered append-mode file sink with optional size-based rotation.
pub struct FileOutput {
    path: PathBuf,
    writer: BufWriter<File>,
    rotation: Option<FileRotation>,
    written: u64,
}

impl FileOutput {
    /// Open the live file for appending, creating parent directories as
    /// needed. Rotation accounting picks up the existing file size.
    pub fn open(path: impl AsRef<Path>, rotation: Option<FileRotation>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let file = append_handle(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            rotation,
            written,
        })
    }

    /// Archive the live file and start a fresh one.
    fn rotate(&mut self, policy: &FileRotation) -> io::Result<()> {
        self.writer.flush()?;

        let archive = free_archive_path(&self.path);
        fs::rename(&self.path, &archive)?;
        tracing::debug!(archive = %archive.display(), "rotated log file");
        prune_archives(&self.path, policy.max_files)?;

        self.writer = BufWriter::new(append_handle(&self.path)?);
        self.written = 0;
        Ok(())
    }
}

impl LogOutput for FileOutput {
    fn write(&mut self, line: &str) -> io::Result<()> {
        let added = line.len() as u64 + 1;

        // Rotate before the write that would cross the ceiling. A line
        // larger than max_size still lands in a file of its own rather
        // than rotating forever.
        if let Some(policy) = self.rotation.clone() {
            if self.written > 0 && self.written + added > policy.max_size {
                self.rotate(&policy)?;
            }
        }

        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.written += added;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

fn append_handle(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Archive name for a live file: the stamp slots in before the extension,
/// `app.log` to `app.<stamp>.log`, extension-less `app` to `app.<stamp>`.
fn archive_path(live: &Path, stamp: &str) -> PathBuf {
    let stem = live.file_stem().unwrap_or_default().to_string_lossy();
    let name = match live.extension() {
        Some(ext) => format!("{stem}.{stamp}.{}", ext.to_string_lossy()),
        None => format!("{stem}.{stamp}"),
    };
    live.with_file_name(name)
}

/// Pick an archive path that does not already exist. Rotations within the
/// same second get a numeric suffix after the stamp.
fn free_archive_path(live: &Path) -> PathBuf {
    let stamp = Utc::now().format("%Y%m%d-%H%M%S").to_string();
    let first = archive_path(live, &stamp);
    if !first.exists() {
        return first;
    }
    let mut n = 1u32;
    loop {
        let candidate = archive_path(live, &format!("{stamp}-{n}"));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Delete the oldest archives of `live` so at most `max_files` remain.
/// Age is taken from the filesystem modification time, which for an
/// archive is its final write.
fn prune_archives(live: &Path, max_files: usize) -> io::Result<()> {
    let dir = match live.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let stem = live.file_stem().unwrap_or_default().to_string_lossy();
    let prefix = format!("{stem}.");
    let live_name = live.file_name().unwrap_or_default().to_owned();

    let mut archives = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name == live_name {
            continue;
        }
        if name.to_string_lossy().starts_with(&prefix) {
            archives.push(entry.path());
        }
    }

    if archives.len() <= max_files {
        return Ok(());
    }
    archives.sort_by_key(|p| fs::metadata(p).and_then(|m| m.modified()).ok());
    for stale in &archives[..archives.len() - max_files] {
        fs::remove_file(stale)?;
    }
    Ok(())
}

/// Create output from configuration.
pub fn create_output(config: &OutputConfig) -> io::Result<Box<dyn LogOutput>> {
    Ok(match config {
        OutputConfig::Stdout => Box::new(StdoutOutput),
        OutputConfig::Stderr => Box::new(StderrOutput),
        OutputConfig::File { path, rotation } => {
            Box::new(FileOutput::open(path, rotation.clone())?)
        }
    })
}
