// src/exec/executor.rs

//! Applies instructions to a single [`Process`].
//!
//! The executor mutates registers, `pc` and the loop-detection counters of
//! exactly one process per call. It performs no IO of its own: failures are
//! reported through the injected [`DiagnosticSink`] and returned to the
//! caller, which decides whether to care (the scheduler only counts them).

use crate::exec::decoder::decode;
use crate::exec::instruction::{ExecError, Instruction, Operand};
use crate::process::Process;
use crate::sink::DiagnosticSink;

/// Decode `text` and execute it against `process`.
///
/// A decode error leaves the process untouched.
pub fn execute(
    process: &mut Process,
    text: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ExecError> {
    match decode(text) {
        Ok(instruction) => execute_decoded(process, instruction, sink),
        Err(err) => Err(report(process, ExecError::Decode(err), sink)),
    }
}

/// Execute the pre-decoded instruction at the process's current `pc`.
///
/// The `pc` is not advanced here; stepping is the scheduler's job.
pub fn execute_current(
    process: &mut Process,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ExecError> {
    let decoded = match process.current_decoded() {
        Some(decoded) => decoded.clone(),
        None => {
            let err = ExecError::NoInstruction { pc: process.pc };
            return Err(report(process, err, sink));
        }
    };

    match decoded {
        Ok(instruction) => execute_decoded(process, instruction, sink),
        Err(err) => Err(report(process, ExecError::Decode(err), sink)),
    }
}

/// Execute an already-decoded instruction.
pub fn execute_decoded(
    process: &mut Process,
    instruction: Instruction,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ExecError> {
    match instruction {
        Instruction::Nop => {}
        Instruction::Inc(reg) => {
            let value = process.register(reg).wrapping_add(1);
            process.set_register(reg, value);
        }
        Instruction::Arith { op, dest, operand } => {
            let rhs = match operand {
                Operand::Immediate(value) => value,
                Operand::Register(src) => process.register(src),
            };
            let result = op.apply(process.register(dest), rhs);
            process.set_register(dest, result);
        }
        Instruction::Jmp(target) => jump(process, target, sink)?,
    }

    Ok(())
}

/// Valid jumps land `pc` one *before* the target, so that the scheduler's
/// uniform post-step increment leaves `pc == target`.
fn jump(process: &mut Process, target: i64, sink: &mut dyn DiagnosticSink) -> Result<(), ExecError> {
    let len = process.num_instructions();
    let in_range = usize::try_from(target).is_ok_and(|t| t < len);

    if !in_range {
        return Err(report(process, ExecError::JumpOutOfRange { target, len }, sink));
    }

    if target == process.last_jump {
        process.repeated_jumps = process.repeated_jumps.saturating_add(1);
    } else {
        process.repeated_jumps = 0;
        process.last_jump = target;
    }

    process.pc = target - 1;
    Ok(())
}

fn report(process: &Process, err: ExecError, sink: &mut dyn DiagnosticSink) -> ExecError {
    sink.error(&format!("pid {} at pc {}: {err}", process.pid, process.pc));
    err
}
