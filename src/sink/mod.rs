// src/sink/mod.rs

//! Diagnostic sinks.
//!
//! The scheduler and executor never print. They report context switches,
//! snapshots, instruction traces and errors to a [`DiagnosticSink`] passed in
//! by the caller, who also owns the sink's lifetime.
//!
//! Sink methods are infallible: an implementation that can fail (such as
//! [`LogFileSink`]) handles its own errors so that a broken sink never aborts
//! a simulation.
//!
//! - [`tracing_sink`] forwards to `tracing` (the console, via the global
//!   subscriber).
//! - [`log_file`] writes `[INFO]` / `[ERROR]` lines to a file.

use std::fmt;

pub mod log_file;
pub mod tracing_sink;

pub use log_file::LogFileSink;
pub use tracing_sink::TracingSink;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver of leveled simulation diagnostics.
pub trait DiagnosticSink {
    fn info(&mut self, msg: &str);
    fn error(&mut self, msg: &str);

    fn emit(&mut self, severity: Severity, msg: &str) {
        match severity {
            Severity::Info => self.info(msg),
            Severity::Error => self.error(msg),
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn info(&mut self, msg: &str) {
        (**self).info(msg);
    }

    fn error(&mut self, msg: &str) {
        (**self).error(msg);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn info(&mut self, msg: &str) {
        (**self).info(msg);
    }

    fn error(&mut self, msg: &str) {
        (**self).error(msg);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn info(&mut self, _msg: &str) {}
    fn error(&mut self, _msg: &str) {}
}

/// Forwards every message to each inner sink, in order.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn DiagnosticSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn push(&mut self, sink: Box<dyn DiagnosticSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl fmt::Debug for FanoutSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanoutSink")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl DiagnosticSink for FanoutSink {
    fn info(&mut self, msg: &str) {
        for sink in self.sinks.iter_mut() {
            sink.info(msg);
        }
    }

    fn error(&mut self, msg: &str) {
        for sink in self.sinks.iter_mut() {
            sink.error(msg);
        }
    }
}
