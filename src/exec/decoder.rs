// src/exec/decoder.rs

//! Text → [`Instruction`] decoding.
//!
//! The two-operand form (`OP DEST, OPERAND`) is tried first, then the
//! one-operand form (`OP ARG`), then the bare `NOP`. Mnemonics and register
//! names are case-sensitive.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::exec::instruction::{ArithOp, DecodeError, Instruction, Operand};
use crate::types::Register;

static TWO_OPERAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]+)\s+([^\s,]+)\s*,\s*(\S+)$").expect("two-operand pattern is valid")
});

static ONE_OPERAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]+)\s+(\S+)$").expect("one-operand pattern is valid")
});

/// Decode a single line of instruction text.
pub fn decode(text: &str) -> Result<Instruction, DecodeError> {
    let line = text.trim();

    if let Some(caps) = TWO_OPERAND.captures(line) {
        return decode_two_operand(line, &caps[1], &caps[2], &caps[3]);
    }

    if let Some(caps) = ONE_OPERAND.captures(line) {
        return decode_one_operand(line, &caps[1], &caps[2]);
    }

    if line == "NOP" {
        return Ok(Instruction::Nop);
    }

    Err(DecodeError::Syntax(line.to_string()))
}

fn decode_two_operand(
    line: &str,
    mnemonic: &str,
    dest: &str,
    operand: &str,
) -> Result<Instruction, DecodeError> {
    let op = match mnemonic {
        "ADD" => ArithOp::Add,
        "SUB" => ArithOp::Sub,
        "MUL" => ArithOp::Mul,
        _ => return Err(DecodeError::Syntax(line.to_string())),
    };

    Ok(Instruction::Arith {
        op,
        dest: parse_register(line, dest)?,
        operand: parse_operand(line, operand)?,
    })
}

fn decode_one_operand(line: &str, mnemonic: &str, arg: &str) -> Result<Instruction, DecodeError> {
    match mnemonic {
        "INC" => Ok(Instruction::Inc(parse_register(line, arg)?)),
        "JMP" => Ok(Instruction::Jmp(parse_literal(line, arg)?)),
        _ => Err(DecodeError::Syntax(line.to_string())),
    }
}

fn parse_register(line: &str, token: &str) -> Result<Register, DecodeError> {
    Register::from_str(token).map_err(|_| DecodeError::UnknownRegister {
        register: token.to_string(),
        text: line.to_string(),
    })
}

fn parse_literal(line: &str, token: &str) -> Result<i64, DecodeError> {
    token.parse::<i64>().map_err(|_| DecodeError::InvalidLiteral {
        literal: token.to_string(),
        text: line.to_string(),
    })
}

/// Tokens that start like a number are literals; anything else must name a
/// register.
fn parse_operand(line: &str, token: &str) -> Result<Operand, DecodeError> {
    let looks_numeric = token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+');

    if looks_numeric {
        parse_literal(line, token).map(Operand::Immediate)
    } else {
        parse_register(line, token).map(Operand::Register)
    }
}
