// src/sink/tracing_sink.rs

use tracing::{error, info};

use super::DiagnosticSink;

/// Forwards diagnostics to `tracing` under the `procplanner::sim` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn info(&mut self, msg: &str) {
        info!(target: "procplanner::sim", "{msg}");
    }

    fn error(&mut self, msg: &str) {
        error!(target: "procplanner::sim", "{msg}");
    }
}
