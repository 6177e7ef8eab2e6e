// src/process/mod.rs

//! Simulated processes and the process-definition loader.
//!
//! - [`record`] holds the [`Process`] type: identity, register file, program
//!   counter, quantum, lifecycle status and loop-detection bookkeeping.
//! - [`loader`] parses process-definition files (and any per-process
//!   instruction files they reference) into an ordered `Vec<Process>`.

pub mod loader;
pub mod record;

pub use loader::{LoaderOptions, load_processes, parse_processes};
pub use record::{DEFAULT_QUANTUM, NO_JUMP, Process, Snapshot};
