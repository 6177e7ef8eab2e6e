// src/scheduler/mod.rs

//! Round-robin scheduling.
//!
//! - [`round_robin`] owns the process table and drives visits and passes.
//! - [`visit`] defines the per-visit result types, used by tests and by the
//!   final report.

pub mod round_robin;
pub mod visit;

pub use round_robin::{REPEATED_JUMP_THRESHOLD, Scheduler, SchedulerPolicy};
pub use visit::{Termination, Visit, VisitOutcome};
