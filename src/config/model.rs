// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::process::record::DEFAULT_QUANTUM;
use crate::scheduler::REPEATED_JUMP_THRESHOLD;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [simulation]
/// repeated_jump_threshold = 2
/// step_limit = 10000
///
/// [loader]
/// max_processes = 10
/// max_instructions = 20
/// default_quantum = 3
///
/// [log]
/// file = "procplanner.log"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub simulation: SimulationSection,

    #[serde(default)]
    pub loader: LoaderSection,

    #[serde(default)]
    pub log: LogSection,
}

/// Validated configuration. Construct through `ConfigFile::try_from`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub simulation: SimulationSection,
    pub loader: LoaderSection,
    pub log: LogSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        simulation: SimulationSection,
        loader: LoaderSection,
        log: LogSection,
    ) -> Self {
        Self {
            simulation,
            loader,
            log,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        let raw = RawConfigFile::default();
        Self::new_unchecked(raw.simulation, raw.loader, raw.log)
    }
}

/// `[simulation]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationSection {
    /// A process is force-terminated once its count of consecutive jumps to
    /// the same target exceeds this value.
    #[serde(default = "default_repeated_jump_threshold")]
    pub repeated_jump_threshold: u32,

    /// Optional cap on the total instructions a single process may execute.
    ///
    /// Unset by default, leaving the repeated-jump guard as the only forced
    /// termination.
    #[serde(default)]
    pub step_limit: Option<u64>,
}

fn default_repeated_jump_threshold() -> u32 {
    REPEATED_JUMP_THRESHOLD
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            repeated_jump_threshold: default_repeated_jump_threshold(),
            step_limit: None,
        }
    }
}

/// `[loader]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LoaderSection {
    #[serde(default = "default_max_processes")]
    pub max_processes: usize,

    /// Longer programs are truncated.
    #[serde(default = "default_max_instructions")]
    pub max_instructions: usize,

    #[serde(default = "default_quantum")]
    pub default_quantum: i64,
}

fn default_max_processes() -> usize {
    10
}

fn default_max_instructions() -> usize {
    20
}

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

impl Default for LoaderSection {
    fn default() -> Self {
        Self {
            max_processes: default_max_processes(),
            max_instructions: default_max_instructions(),
            default_quantum: default_quantum(),
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogSection {
    /// If set, simulation diagnostics are also written to this file.
    #[serde(default)]
    pub file: Option<PathBuf>,
}
