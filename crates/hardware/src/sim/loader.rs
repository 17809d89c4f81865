//! Assembly Loader.
//!
//! This module turns ASP assembly source into a [`Program`]. It performs:
//! 1. **Line handling:** Trims whitespace, drops blank lines and `#` comments.
//! 2. **Labels:** `name:` binds `name` to the index of the next instruction; an
//!    instruction may follow on the same line.
//! 3. **Instruction parsing:** Case-insensitive mnemonics with the operand shapes
//!    `ADD Rd, Rs, Rt`, `SUB Rd, Rs, Rt`, `LW Rd, imm(Rs)`, `SW Rs, imm(Rd)`,
//!    `BEQ Rs, Rt, label`, `J label`, `OUT port, Rs`, `SET Rd, imm`, and `NOP`.
//!
//! Register numbers outside `R0`-`R15` are clamped into range and unknown mnemonics
//! load as `NOP`, both with a warning. Malformed operands are an error.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::common::constants::NUM_REGS;
use crate::common::error::LoadError;
use crate::common::reg::Word;
use crate::isa::instruction::{Instruction, Op};
use crate::isa::labels::LabelTable;
use crate::isa::program::Program;

/// Reads and parses a program file.
///
/// # Arguments
///
/// * `path` - Path to the assembly source.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise as [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&source)?;
    info!(
        path = %path.display(),
        instructions = program.len(),
        labels = program.labels().len(),
        "program loaded"
    );
    Ok(program)
}

/// Parses assembly source into a program.
///
/// # Errors
///
/// Returns [`LoadError::Operands`] for an instruction whose operands do not match
/// its mnemonic and [`LoadError::InvalidLabel`] for an empty or malformed label.
pub fn parse_program(source: &str) -> Result<Program, LoadError> {
    let mut instructions = Vec::new();
    let mut labels = LabelTable::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let code = raw.split_once('#').map_or(raw, |(code, _)| code).trim();
        if code.is_empty() {
            continue;
        }

        let code = match code.split_once(':') {
            Some((name, rest)) => {
                let name = name.trim();
                if name.is_empty() || name.contains(char::is_whitespace) {
                    return Err(LoadError::InvalidLabel {
                        line,
                        name: name.to_string(),
                    });
                }
                if !labels.define(name, instructions.len()) {
                    warn!(line, label = name, "duplicate label ignored; first definition wins");
                }
                rest.trim()
            }
            None => code,
        };
        if code.is_empty() {
            continue;
        }

        instructions.push(parse_instruction(code, line)?);
    }

    Ok(Program::new(instructions, labels))
}

/// Parses one instruction (no label, no comment).
///
/// # Errors
///
/// Returns [`LoadError::Operands`] if the operands do not fit the mnemonic.
pub fn parse_instruction(code: &str, line: usize) -> Result<Instruction, LoadError> {
    let (mnemonic, rest) = code
        .split_once(char::is_whitespace)
        .map_or((code, ""), |(m, r)| (m, r.trim()));
    let mnemonic = mnemonic.to_ascii_uppercase();
    let args: Vec<&str> = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split(',').map(str::trim).collect()
    };

    let op = parse_op(&mnemonic, &args, line).map_err(|reason| LoadError::Operands {
        line,
        mnemonic: mnemonic.clone(),
        text: code.to_string(),
        reason,
    })?;
    Ok(Instruction::with_text(op, code))
}

fn parse_op(mnemonic: &str, args: &[&str], line: usize) -> Result<Op, String> {
    let op = match mnemonic {
        "ADD" | "SUB" => {
            let [rd, rs, rt] = operands::<3>(args)?;
            let (rd, rs, rt) = (register(rd, line)?, register(rs, line)?, register(rt, line)?);
            if mnemonic == "ADD" {
                Op::Add { rd, rs, rt }
            } else {
                Op::Sub { rd, rs, rt }
            }
        }
        "LW" => {
            let [rd, addr] = operands::<2>(args)?;
            let (offset, base) = memory_operand(addr, line)?;
            Op::Load {
                rd: register(rd, line)?,
                base,
                offset,
            }
        }
        "SW" => {
            let [src, addr] = operands::<2>(args)?;
            let (offset, base) = memory_operand(addr, line)?;
            Op::Store {
                src: register(src, line)?,
                base,
                offset,
            }
        }
        "BEQ" => {
            let [rs, rt, target] = operands::<3>(args)?;
            Op::BranchEq {
                rs: register(rs, line)?,
                rt: register(rt, line)?,
                target: label(target)?,
            }
        }
        "J" => {
            let [target] = operands::<1>(args)?;
            Op::Jump {
                target: label(target)?,
            }
        }
        "OUT" => {
            let [port, rs] = operands::<2>(args)?;
            let port = port
                .parse::<usize>()
                .map_err(|_| format!("expected non-negative port number, found '{port}'"))?;
            Op::Output {
                port,
                rs: register(rs, line)?,
            }
        }
        "SET" => {
            let [rd, imm] = operands::<2>(args)?;
            Op::Set {
                rd: register(rd, line)?,
                imm: immediate(imm)?,
            }
        }
        "NOP" => Op::Nop,
        other => {
            warn!(line, mnemonic = other, "unknown mnemonic loaded as NOP");
            Op::Nop
        }
    };
    Ok(op)
}

fn operands<'a, const N: usize>(args: &[&'a str]) -> Result<[&'a str; N], String> {
    <[&'a str; N]>::try_from(args)
        .map_err(|_| format!("expected {N} operands, found {}", args.len()))
}

fn register(token: &str, line: usize) -> Result<usize, String> {
    let digits = token
        .strip_prefix(['R', 'r'])
        .ok_or_else(|| format!("expected register, found '{token}'"))?;
    let n: i64 = digits
        .trim()
        .parse()
        .map_err(|_| format!("expected register, found '{token}'"))?;
    let clamped = n.clamp(0, NUM_REGS as i64 - 1) as usize;
    if clamped as i64 != n {
        warn!(line, register = n, clamped, "register index out of range");
    }
    Ok(clamped)
}

fn immediate(token: &str) -> Result<Word, String> {
    token
        .parse()
        .map_err(|_| format!("expected integer immediate, found '{token}'"))
}

/// Parses `imm(Rn)` into `(imm, n)`. An empty immediate means 0.
fn memory_operand(token: &str, line: usize) -> Result<(Word, usize), String> {
    let malformed = || format!("expected imm(Rn), found '{token}'");
    let (imm, rest) = token.split_once('(').ok_or_else(malformed)?;
    let reg = rest.strip_suffix(')').ok_or_else(malformed)?;
    let imm = imm.trim();
    let offset = if imm.is_empty() { 0 } else { immediate(imm)? };
    Ok((offset, register(reg.trim(), line)?))
}

fn label(token: &str) -> Result<String, String> {
    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(format!("expected label, found '{token}'"));
    }
    Ok(token.to_string())
}
