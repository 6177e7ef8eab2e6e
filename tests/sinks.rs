// tests/sinks.rs

mod common;
use crate::common::builders::ProcessBuilder;
use crate::common::{init_tracing, RecordingSink};

use std::fs;

use tempfile::tempdir;

use procplanner::logging::resolve_level;
use procplanner::cli::LogLevel;
use procplanner::scheduler::{Scheduler, SchedulerPolicy};
use procplanner::sink::{DiagnosticSink, FanoutSink, LogFileSink, NullSink, Severity, TracingSink};
use procplanner::types::ProcessStatus;

#[test]
fn log_file_sink_writes_prefixed_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logs").join("sim.log");

    let mut sink = LogFileSink::create(&path).unwrap();
    sink.info("context switch: pid 1 Ready -> Executing");
    sink.error("pid 1 at pc 0: syntax error: \"FOO\"");
    assert!(sink.is_healthy());
    sink.close().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "[INFO] context switch: pid 1 Ready -> Executing\n[ERROR] pid 1 at pc 0: syntax error: \"FOO\"\n"
    );
}

#[test]
fn log_file_is_flushed_on_drop() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sim.log");

    {
        let mut sink = LogFileSink::create(&path).unwrap();
        sink.emit(Severity::Info, "hello");
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "[INFO] hello\n");
}

#[test]
fn log_file_sink_create_fails_when_parent_is_a_file() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "x").unwrap();

    // A regular file cannot act as a parent directory.
    assert!(LogFileSink::create(blocker.join("sim.log")).is_err());
}

#[test]
fn fanout_forwards_to_every_sink() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("fan.log");

    let mut fanout = FanoutSink::new()
        .with(TracingSink)
        .with(NullSink)
        .with(LogFileSink::create(&path).unwrap());
    assert_eq!(fanout.len(), 3);

    fanout.info("one");
    fanout.error("two");
    drop(fanout);

    assert_eq!(fs::read_to_string(&path).unwrap(), "[INFO] one\n[ERROR] two\n");
}

#[test]
fn simulation_log_matches_recorded_diagnostics() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.log");

    let p = ProcessBuilder::new(1).quantum(2).instrs(&["INC AX", "BAD"]).build();
    let mut recorded = RecordingSink::new();
    {
        let mut file_sink = LogFileSink::create(&path).unwrap();
        let mut both = file_sink_adapter(&mut file_sink, &mut recorded);
        let mut sched = Scheduler::new(vec![p], SchedulerPolicy::default());
        sched.run(&mut both);
    }

    let lines: Vec<String> = fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    let expected: Vec<String> = recorded
        .entries
        .iter()
        .map(|(severity, msg)| format!("[{severity}] {msg}"))
        .collect();
    assert_eq!(lines, expected);
    assert_eq!(lines.last().map(String::as_str), Some("[INFO] all processes finished"));
    assert_eq!(recorded.errors().len(), 1);
}

#[cfg(unix)]
#[test]
fn failing_log_file_is_disabled_and_the_run_continues() {
    init_tracing();
    let p = ProcessBuilder::new(1).quantum(1).instrs(&["INC AX", "INC AX"]).build();
    let mut sink = LogFileSink::create("/dev/full").unwrap();
    let mut sched = Scheduler::new(vec![p], SchedulerPolicy::default());

    let visits = sched.run_with_visits(&mut sink);

    assert!(!sink.is_healthy());
    assert_eq!(visits.len(), 2);
    let p = &sched.processes()[0];
    assert_eq!(p.ax, 2);
    assert_eq!(p.status, ProcessStatus::Finished);
    assert!(sched.all_finished());
}

/// Writes every message to both sinks.
fn file_sink_adapter<'a>(
    file: &'a mut LogFileSink,
    recorded: &'a mut RecordingSink,
) -> impl DiagnosticSink + 'a {
    struct Both<'a>(&'a mut LogFileSink, &'a mut RecordingSink);

    impl DiagnosticSink for Both<'_> {
        fn info(&mut self, msg: &str) {
            self.0.info(msg);
            self.1.info(msg);
        }

        fn error(&mut self, msg: &str) {
            self.0.error(msg);
            self.1.error(msg);
        }
    }

    Both(file, recorded)
}

#[test]
fn log_level_priority() {
    assert_eq!(resolve_level(Some(LogLevel::Debug), Some("error")), tracing::Level::DEBUG);
    assert_eq!(resolve_level(None, Some(" Warning ")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("nonsense")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, None), tracing::Level::INFO);
}
