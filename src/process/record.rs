// src/process/record.rs

use std::fmt;

use crate::exec::decode;
use crate::exec::instruction::{DecodeError, Instruction};
use crate::types::{ProcessStatus, Register};

/// Sentinel for `last_jump` meaning "no jump taken yet".
pub const NO_JUMP: i64 = -1;

/// Quantum used when a process definition does not specify one.
pub const DEFAULT_QUANTUM: i64 = 3;

/// A synthetic process.
///
/// Registers, `pc`, `status` and the loop-detection counters are public and
/// mutated by the executor and scheduler. The instruction list is fixed at
/// construction time and decoded once into `program`.
#[derive(Debug, Clone)]
pub struct Process {
    pub pid: u32,
    pub pc: i64,
    pub ax: i64,
    pub bx: i64,
    pub cx: i64,
    /// Maximum instructions per scheduling visit. Values `<= 0` mean the
    /// process can never make progress.
    pub quantum: i64,
    pub status: ProcessStatus,
    /// Target of the last jump taken, or [`NO_JUMP`].
    pub last_jump: i64,
    /// Number of consecutive jumps to `last_jump`.
    pub repeated_jumps: u32,
    /// Total instructions executed over the whole run.
    pub steps_executed: u64,

    instructions: Vec<String>,
    program: Vec<Result<Instruction, DecodeError>>,
}

impl Process {
    pub fn new(pid: u32, instructions: Vec<String>) -> Self {
        let program = instructions.iter().map(|text| decode(text)).collect();

        Self {
            pid,
            pc: 0,
            ax: 0,
            bx: 0,
            cx: 0,
            quantum: DEFAULT_QUANTUM,
            status: ProcessStatus::Ready,
            last_jump: NO_JUMP,
            repeated_jumps: 0,
            steps_executed: 0,
            instructions,
            program,
        }
    }

    pub fn num_instructions(&self) -> usize {
        self.instructions.len()
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Decoded form of every instruction, index-aligned with [`instructions`].
    ///
    /// [`instructions`]: Process::instructions
    pub fn program(&self) -> &[Result<Instruction, DecodeError>] {
        &self.program
    }

    /// `pc` as an index, if it points at an instruction.
    ///
    /// This is the only place `pc` is turned into an index.
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.pc)
            .ok()
            .filter(|&idx| idx < self.instructions.len())
    }

    /// Whether `0 <= pc < num_instructions`.
    pub fn is_runnable(&self) -> bool {
        self.index().is_some()
    }

    /// Instruction text at `pc`.
    pub fn current(&self) -> Option<&str> {
        self.index().map(|idx| self.instructions[idx].as_str())
    }

    /// Decoded instruction at `pc`.
    pub fn current_decoded(&self) -> Option<&Result<Instruction, DecodeError>> {
        self.index().map(|idx| &self.program[idx])
    }

    pub fn register(&self, reg: Register) -> i64 {
        match reg {
            Register::Ax => self.ax,
            Register::Bx => self.bx,
            Register::Cx => self.cx,
        }
    }

    pub fn set_register(&mut self, reg: Register, value: i64) {
        match reg {
            Register::Ax => self.ax = value,
            Register::Bx => self.bx = value,
            Register::Cx => self.cx = value,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pid: self.pid,
            pc: self.pc,
            ax: self.ax,
            bx: self.bx,
            cx: self.cx,
        }
    }
}

/// Register/pc state of a process at a visit boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub pid: u32,
    pub pc: i64,
    pub ax: i64,
    pub bx: i64,
    pub cx: i64,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pid={} pc={} ax={} bx={} cx={}",
            self.pid, self.pc, self.ax, self.bx, self.cx
        )
    }
}
