use procplanner::sink::{DiagnosticSink, Severity};

/// A sink that records every message for later assertions.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub entries: Vec<(Severity, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<&str> {
        self.with_severity(Severity::Info)
    }

    pub fn errors(&self) -> Vec<&str> {
        self.with_severity(Severity::Error)
    }

    /// Whether any message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|(_, msg)| msg.contains(needle))
    }

    /// Pids in the order they were switched to.
    pub fn context_switches(&self) -> Vec<u32> {
        self.entries
            .iter()
            .filter_map(|(_, msg)| {
                let rest = msg.strip_prefix("context switch: pid ")?;
                rest.split_whitespace().next()?.parse().ok()
            })
            .collect()
    }

    fn with_severity(&self, severity: Severity) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn info(&mut self, msg: &str) {
        self.entries.push((Severity::Info, msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.entries.push((Severity::Error, msg.to_string()));
    }
}
