// src/exec/mod.rs

//! Instruction execution layer.
//!
//! - [`instruction`] defines the closed set of instructions a simulated
//!   process can run, plus the error types for decoding and execution.
//! - [`decoder`] turns instruction text into an [`Instruction`] once, so the
//!   scheduler never re-parses text on every step.
//! - [`executor`] applies a decoded instruction to a single process.

pub mod decoder;
pub mod executor;
pub mod instruction;

pub use decoder::decode;
pub use executor::{execute, execute_current, execute_decoded};
pub use instruction::{ArithOp, DecodeError, ExecError, Instruction, Operand};
