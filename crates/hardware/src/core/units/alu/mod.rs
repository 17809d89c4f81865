//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the execute stage and the
//! single-cycle interpreter. All arithmetic wraps on overflow.

use crate::common::reg::Word;
use crate::isa::instruction::{OPERAND_SLOTS, Op};

/// Values of the operand slots, indexed as [`SourceRegs`](crate::isa::SourceRegs).
pub type OperandValues = [Word; OPERAND_SLOTS];

/// Output of one ALU evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutput {
    /// Arithmetic result, effective address, or pass-through value.
    pub result: Word,
    /// Value to be written to memory (stores only, otherwise 0).
    pub store_data: Word,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Evaluates `op` over its operand values.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation being executed.
    /// * `operands` - Operand slot values (possibly forwarded).
    ///
    /// # Returns
    ///
    /// The sum or difference for `ADD`/`SUB`, the immediate for `SET`, the byte
    /// address for `LW`/`SW` (plus the value to store for `SW`), the source value
    /// for `OUT`, and 0 for `BEQ`, `J`, and `NOP`.
    pub const fn execute(op: &Op, operands: &OperandValues) -> AluOutput {
        let [a, b, c] = *operands;
        match *op {
            Op::Add { .. } => AluOutput {
                result: a.wrapping_add(b),
                store_data: 0,
            },
            Op::Sub { .. } => AluOutput {
                result: a.wrapping_sub(b),
                store_data: 0,
            },
            Op::Load { offset, .. } => AluOutput {
                result: a.wrapping_add(offset),
                store_data: 0,
            },
            Op::Store { offset, .. } => AluOutput {
                result: c.wrapping_add(offset),
                store_data: a,
            },
            Op::Output { .. } => AluOutput {
                result: a,
                store_data: 0,
            },
            Op::Set { imm, .. } => AluOutput {
                result: imm,
                store_data: 0,
            },
            Op::BranchEq { .. } | Op::Jump { .. } | Op::Nop => AluOutput {
                result: 0,
                store_data: 0,
            },
        }
    }
}
