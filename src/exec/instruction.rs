// src/exec/instruction.rs

//! Tagged-variant instruction representation.

use std::fmt;

use thiserror::Error;

use crate::types::Register;

/// Source operand of a two-operand instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Immediate(i64),
    Register(Register),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Immediate(value) => write!(f, "{value}"),
            Operand::Register(reg) => write!(f, "{reg}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
}

impl ArithOp {
    /// Registers wrap on overflow instead of panicking.
    pub fn apply(&self, lhs: i64, rhs: i64) -> i64 {
        match self {
            ArithOp::Add => lhs.wrapping_add(rhs),
            ArithOp::Sub => lhs.wrapping_sub(rhs),
            ArithOp::Mul => lhs.wrapping_mul(rhs),
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            ArithOp::Add => "ADD",
            ArithOp::Sub => "SUB",
            ArithOp::Mul => "MUL",
        }
    }
}

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Nop,
    Inc(Register),
    Arith {
        op: ArithOp,
        dest: Register,
        operand: Operand,
    },
    /// Jump target as written; range checks happen at execution time because
    /// they depend on the owning process.
    Jmp(i64),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Nop => f.write_str("NOP"),
            Instruction::Inc(reg) => write!(f, "INC {reg}"),
            Instruction::Arith { op, dest, operand } => {
                write!(f, "{} {dest}, {operand}", op.mnemonic())
            }
            Instruction::Jmp(target) => write!(f, "JMP {target}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("syntax error: {0:?}")]
    Syntax(String),

    #[error("unknown register {register:?} in {text:?}")]
    UnknownRegister { register: String, text: String },

    #[error("invalid integer literal {literal:?} in {text:?}")]
    InvalidLiteral { literal: String, text: String },
}

/// Instruction-level failures. These are reported to the diagnostic sink and
/// never abort a process or the simulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("jump target {target} out of range (valid: 0..{len})")]
    JumpOutOfRange { target: i64, len: usize },

    #[error("no instruction at pc {pc}")]
    NoInstruction { pc: i64 },
}
