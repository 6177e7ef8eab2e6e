// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod sink;
pub mod types;

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::loader::load_or_default;
use crate::fs::RealFileSystem;
use crate::process::{LoaderOptions, load_processes};
use crate::scheduler::{Scheduler, SchedulerPolicy};
use crate::sink::{FanoutSink, LogFileSink, TracingSink};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - process loading
/// - diagnostic sinks (console + optional log file)
/// - the round-robin scheduler
/// - the final report on stdout
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref())?;

    let options = LoaderOptions::from(&cfg.loader);
    let processes = load_processes(&RealFileSystem, &args.file, &options)?;
    info!(count = processes.len(), file = ?args.file, "loaded processes");

    if args.dry_run {
        print!("{}", report::render_dry_run(&processes));
        return Ok(());
    }

    let mut policy = SchedulerPolicy::from(&cfg.simulation);
    if let Some(threshold) = args.threshold {
        policy.repeated_jump_threshold = threshold;
    }

    let log_path: Option<PathBuf> = args.log_file.clone().or_else(|| cfg.log.file.clone());
    let mut sink = FanoutSink::new().with(TracingSink);
    if let Some(path) = log_path {
        let file_sink = LogFileSink::create(&path)?;
        info!(path = ?file_sink.path(), "writing simulation log");
        sink.push(Box::new(file_sink));
    }

    let mut scheduler = Scheduler::new(processes, policy);
    let visits = scheduler.run_with_visits(&mut sink);
    // Closes the log file before the report is printed.
    drop(sink);

    print!("{}", report::render_summary(scheduler.processes(), &visits));
    Ok(())
}
