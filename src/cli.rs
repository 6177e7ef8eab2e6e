// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `procplanner`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "procplanner",
    version,
    about = "Simulate round-robin scheduling of synthetic processes.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the process-definition file.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Path to the config file (TOML).
    ///
    /// Default: `Procplanner.toml` in the current working directory, if it
    /// exists; built-in defaults otherwise.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also write simulation diagnostics to this file (overrides `[log].file`).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PROCPLANNER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Repeated-jump threshold (overrides `[simulation].repeated_jump_threshold`).
    #[arg(long, value_name = "N")]
    pub threshold: Option<u32>,

    /// Load and print processes, but don't run the simulation.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
