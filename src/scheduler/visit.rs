// src/scheduler/visit.rs

//! Per-visit result types for the scheduler.

use std::fmt;

use crate::process::Snapshot;

/// Why a process was forced to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Consecutive jumps to `target` exceeded the repeated-jump threshold.
    RepeatedJump { target: i64, repeats: u32 },
    /// The process used up its total step budget.
    StepLimit { limit: u64 },
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::RepeatedJump { target, repeats } => {
                write!(f, "repeated jump to {target} ({repeats} repeats)")
            }
            Termination::StepLimit { limit } => write!(f, "step limit of {limit} reached"),
        }
    }
}

/// How a single visit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitOutcome {
    /// Quantum used up; the process goes back to `Ready`.
    Preempted,
    /// `pc` left the instruction range; the process is `Finished`.
    Completed,
    /// The process cannot make progress (`quantum <= 0`) and is `Finished`.
    NoProgress,
    /// A loop guard fired; the process is `Finished`.
    ForcedTermination(Termination),
}

impl VisitOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, VisitOutcome::Preempted)
    }
}

/// Structured record of one scheduling visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub pid: u32,
    /// 1-based pass in which the visit happened.
    pub pass: u64,
    /// Instructions executed during this visit (including failed ones).
    pub executed: u64,
    /// Instructions that failed to decode or jumped out of range.
    pub errors: u64,
    pub outcome: VisitOutcome,
    pub before: Snapshot,
    pub after: Snapshot,
}
