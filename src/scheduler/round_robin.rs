// src/scheduler/round_robin.rs

use tracing::{debug, info, warn};

use crate::config::model::SimulationSection;
use crate::exec::execute_current;
use crate::process::Process;
use crate::scheduler::visit::{Termination, Visit, VisitOutcome};
use crate::sink::DiagnosticSink;
use crate::types::ProcessStatus;

/// Default repeated-jump threshold.
pub const REPEATED_JUMP_THRESHOLD: u32 = 2;

/// Termination policy applied on every visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerPolicy {
    /// Force-terminate once `repeated_jumps` exceeds this value.
    pub repeated_jump_threshold: u32,
    /// Force-terminate once a process has executed this many instructions in
    /// total. `None` disables the check.
    pub step_limit: Option<u64>,
}

impl Default for SchedulerPolicy {
    fn default() -> Self {
        Self {
            repeated_jump_threshold: REPEATED_JUMP_THRESHOLD,
            step_limit: None,
        }
    }
}

impl From<&SimulationSection> for SchedulerPolicy {
    fn from(section: &SimulationSection) -> Self {
        Self {
            repeated_jump_threshold: section.repeated_jump_threshold,
            step_limit: section.step_limit,
        }
    }
}

/// Round-robin scheduler over a fixed, ordered process table.
///
/// It is responsible for:
/// - visiting non-finished processes strictly in load order
/// - granting each visit up to `quantum` instruction executions
/// - advancing `pc` after every executed instruction
/// - moving each process along `Ready -> Executing -> {Ready | Finished}`
/// - force-terminating runaway loops
///
/// The table is exclusively owned for the whole run; only the process being
/// visited is ever `Executing`.
#[derive(Debug)]
pub struct Scheduler {
    processes: Vec<Process>,
    policy: SchedulerPolicy,
    /// Number of passes started so far.
    passes: u64,
}

impl Scheduler {
    pub fn new(processes: Vec<Process>, policy: SchedulerPolicy) -> Self {
        Self {
            processes,
            policy,
            passes: 0,
        }
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn into_processes(self) -> Vec<Process> {
        self.processes
    }

    pub fn policy(&self) -> SchedulerPolicy {
        self.policy
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Returns `true` once every process is `Finished`.
    pub fn all_finished(&self) -> bool {
        self.processes.iter().all(|p| p.status.is_finished())
    }

    /// Number of processes currently `Executing`. Always 0 between visits.
    pub fn executing_count(&self) -> usize {
        self.processes
            .iter()
            .filter(|p| p.status == ProcessStatus::Executing)
            .count()
    }

    /// Drive the simulation until every process is `Finished` (production API).
    pub fn run(&mut self, sink: &mut dyn DiagnosticSink) {
        self.run_with_visits(sink);
    }

    /// Variant of [`run`](Scheduler::run) that returns every visit in order.
    pub fn run_with_visits(&mut self, sink: &mut dyn DiagnosticSink) -> Vec<Visit> {
        let mut visits = Vec::new();

        while !self.all_finished() {
            visits.extend(self.run_pass(sink));
        }

        sink.info("all processes finished");
        info!(
            passes = self.passes,
            visits = visits.len(),
            "scheduler: simulation complete"
        );
        visits
    }

    /// Visit every non-finished process once, in load order.
    pub fn run_pass(&mut self, sink: &mut dyn DiagnosticSink) -> Vec<Visit> {
        self.passes += 1;
        debug!(pass = self.passes, "scheduler: starting pass");

        let mut visits = Vec::new();
        for index in 0..self.processes.len() {
            if let Some(visit) = self.visit(index, sink) {
                visits.push(visit);
            }
        }
        visits
    }

    /// Visit the process at `index` in the table.
    ///
    /// Returns `None` for finished processes and out-of-range indices.
    pub fn visit(&mut self, index: usize, sink: &mut dyn DiagnosticSink) -> Option<Visit> {
        let policy = self.policy;
        let pass = self.passes.max(1);

        let process = self.processes.get_mut(index)?;
        if process.status.is_finished() {
            return None;
        }

        let visit = visit_process(process, &policy, pass, sink);
        debug_assert_eq!(self.executing_count(), 0);
        Some(visit)
    }
}

fn visit_process(
    process: &mut Process,
    policy: &SchedulerPolicy,
    pass: u64,
    sink: &mut dyn DiagnosticSink,
) -> Visit {
    let pid = process.pid;
    let before = process.snapshot();

    process.status = ProcessStatus::Executing;
    sink.info(&format!("context switch: pid {pid} Ready -> Executing"));
    sink.info(&format!("before: {before}"));

    let mut executed: u64 = 0;
    let mut errors: u64 = 0;
    let mut forced: Option<Termination> = None;

    while i64::try_from(executed).is_ok_and(|n| n < process.quantum) {
        let Some(index) = process.index() else {
            break;
        };
        sink.info(&format!("pid {pid} [{index}] {}", process.instructions()[index]));

        if execute_current(process, sink).is_err() {
            errors += 1;
        }
        process.pc += 1;
        process.steps_executed += 1;
        executed += 1;

        if process.repeated_jumps > policy.repeated_jump_threshold {
            forced = Some(Termination::RepeatedJump {
                target: process.last_jump,
                repeats: process.repeated_jumps,
            });
            break;
        }

        if let Some(limit) = policy.step_limit {
            if process.steps_executed >= limit && process.is_runnable() {
                forced = Some(Termination::StepLimit { limit });
                break;
            }
        }
    }

    let outcome = match forced {
        Some(reason) => VisitOutcome::ForcedTermination(reason),
        None if !process.is_runnable() => VisitOutcome::Completed,
        None if process.quantum <= 0 => VisitOutcome::NoProgress,
        None => VisitOutcome::Preempted,
    };

    match outcome {
        VisitOutcome::ForcedTermination(reason) => {
            warn!(pid, %reason, "scheduler: forcing process termination");
            sink.error(&format!("pid {pid} terminated: {reason}"));
        }
        VisitOutcome::NoProgress => {
            warn!(pid, quantum = process.quantum, "scheduler: non-positive quantum; finishing process");
        }
        VisitOutcome::Completed | VisitOutcome::Preempted => {}
    }

    process.status = if outcome.is_terminal() {
        ProcessStatus::Finished
    } else {
        ProcessStatus::Ready
    };

    let after = process.snapshot();
    sink.info(&format!("after: {after}"));
    sink.info(&format!("pid {pid} Executing -> {}", process.status));
    debug!(pid, executed, errors, ?outcome, "scheduler: visit complete");

    Visit {
        pid,
        pass,
        executed,
        errors,
        outcome,
        before,
        after,
    }
}
