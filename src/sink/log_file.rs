// src/sink/log_file.rs

//! File-backed sink.
//!
//! Every message becomes one `[LEVEL] message` line and is flushed
//! immediately. The file is opened (and truncated) by
//! [`LogFileSink::create`] and closed when the sink is dropped or
//! [`LogFileSink::close`]d.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{DiagnosticSink, Severity};
use crate::errors::Result;

#[derive(Debug)]
pub struct LogFileSink {
    path: PathBuf,
    /// `None` once a write has failed; later messages are dropped.
    writer: Option<BufWriter<File>>,
}

impl LogFileSink {
    /// Create (or truncate) the log file, creating parent directories.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&path)?;
        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the sink is still writing (no write has failed).
    pub fn is_healthy(&self) -> bool {
        self.writer.is_some()
    }

    /// Flush and close the file, surfacing any final IO error.
    pub fn close(mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }

    fn write_line(&mut self, severity: Severity, msg: &str) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        let result = writeln!(writer, "[{severity}] {msg}").and_then(|_| writer.flush());
        if let Err(err) = result {
            warn!(
                path = ?self.path,
                error = %err,
                "failed to write log file; disabling file logging"
            );
            self.writer = None;
        }
    }
}

impl DiagnosticSink for LogFileSink {
    fn info(&mut self, msg: &str) {
        self.write_line(Severity::Info, msg);
    }

    fn error(&mut self, msg: &str) {
        self.write_line(Severity::Error, msg);
    }
}

impl Drop for LogFileSink {
    fn drop(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            let _ = writer.flush();
        }
    }
}
