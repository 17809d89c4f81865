//! Instruction model and opcode predicates.
//!
//! Every instruction is an [`Op`] variant carrying exactly the operands its
//! mnemonic takes, together with the source text it was parsed from. The
//! predicates defined here (`writes_back`, `dest_reg`, `source_regs`, `is_load`)
//! are the single definition consumed by decode, the hazard unit, the forwarding
//! unit, and writeback.

use std::fmt;

use crate::common::reg::Word;

/// Number of operand value slots carried from decode to execute.
pub const OPERAND_SLOTS: usize = 3;

/// Source registers of an instruction, one entry per operand slot.
///
/// Slot 0 holds the first source (`rs`, a load base, a store value, or an output
/// source), slot 1 the second ALU/branch source (`rt`), and slot 2 the base
/// register of a store.
pub type SourceRegs = [Option<usize>; OPERAND_SLOTS];

/// A decoded ASP operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    /// No operation.
    Nop,
    /// `ADD Rd, Rs, Rt`: `Rd = Rs + Rt` (wrapping).
    Add {
        /// Destination register.
        rd: usize,
        /// First source register.
        rs: usize,
        /// Second source register.
        rt: usize,
    },
    /// `SUB Rd, Rs, Rt`: `Rd = Rs - Rt` (wrapping).
    Sub {
        /// Destination register.
        rd: usize,
        /// First source register.
        rs: usize,
        /// Second source register.
        rt: usize,
    },
    /// `LW Rd, imm(Rbase)`: load the word at byte address `Rbase + imm`.
    Load {
        /// Destination register.
        rd: usize,
        /// Base address register.
        base: usize,
        /// Signed byte offset.
        offset: Word,
    },
    /// `SW Rsrc, imm(Rbase)`: store `Rsrc` at byte address `Rbase + imm`.
    Store {
        /// Register holding the value to store.
        src: usize,
        /// Base address register.
        base: usize,
        /// Signed byte offset.
        offset: Word,
    },
    /// `BEQ Rs, Rt, label`: branch to `label` when `Rs == Rt`.
    BranchEq {
        /// First compared register.
        rs: usize,
        /// Second compared register.
        rt: usize,
        /// Target label name.
        target: String,
    },
    /// `J label`: unconditional jump.
    Jump {
        /// Target label name.
        target: String,
    },
    /// `OUT port, Rs`: write `Rs` to an output port.
    Output {
        /// Output port index.
        port: usize,
        /// Source register.
        rs: usize,
    },
    /// `SET Rd, imm`: load an immediate.
    Set {
        /// Destination register.
        rd: usize,
        /// Immediate value.
        imm: Word,
    },
}

/// Coarse instruction category, used for the instruction mix statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstClass {
    /// `ADD`, `SUB`, `SET`.
    Alu,
    /// `LW`.
    Load,
    /// `SW`.
    Store,
    /// `BEQ`, `J`.
    Branch,
    /// `OUT`.
    Output,
    /// `NOP`.
    Nop,
}

impl Op {
    /// Returns `true` if the operation commits a result to the register file.
    ///
    /// Exactly `ADD`, `SUB`, `LW`, and `SET` write back.
    pub const fn writes_back(&self) -> bool {
        matches!(
            self,
            Self::Add { .. } | Self::Sub { .. } | Self::Load { .. } | Self::Set { .. }
        )
    }

    /// Returns the destination register of a write-back operation.
    pub const fn dest_reg(&self) -> Option<usize> {
        match *self {
            Self::Add { rd, .. } | Self::Sub { rd, .. } | Self::Load { rd, .. } | Self::Set { rd, .. } => {
                Some(rd)
            }
            _ => None,
        }
    }

    /// Returns `true` for `LW`, whose result is only available after MEM.
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::Load { .. })
    }

    /// Returns the registers read by this operation, by operand slot.
    ///
    /// `ADD`/`SUB`/`BEQ` read `rs` and `rt`; `LW` reads its base; `SW` reads its value
    /// and its base; `OUT` reads its source. `SET`, `J`, and `NOP` read nothing.
    pub const fn source_regs(&self) -> SourceRegs {
        match *self {
            Self::Add { rs, rt, .. } | Self::Sub { rs, rt, .. } | Self::BranchEq { rs, rt, .. } => {
                [Some(rs), Some(rt), None]
            }
            Self::Load { base, .. } => [Some(base), None, None],
            Self::Store { src, base, .. } => [Some(src), None, Some(base)],
            Self::Output { rs, .. } => [Some(rs), None, None],
            Self::Set { .. } | Self::Jump { .. } | Self::Nop => [None, None, None],
        }
    }

    /// Returns `true` if `reg` is one of this operation's source registers.
    pub fn reads_register(&self, reg: usize) -> bool {
        self.source_regs().contains(&Some(reg))
    }

    /// Returns the label a branch or jump transfers control to.
    pub fn branch_target(&self) -> Option<&str> {
        match self {
            Self::BranchEq { target, .. } | Self::Jump { target } => Some(target),
            _ => None,
        }
    }

    /// Returns the instruction mix category.
    pub const fn class(&self) -> InstClass {
        match self {
            Self::Add { .. } | Self::Sub { .. } | Self::Set { .. } => InstClass::Alu,
            Self::Load { .. } => InstClass::Load,
            Self::Store { .. } => InstClass::Store,
            Self::BranchEq { .. } | Self::Jump { .. } => InstClass::Branch,
            Self::Output { .. } => InstClass::Output,
            Self::Nop => InstClass::Nop,
        }
    }

    /// Returns the upper-case mnemonic.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Add { .. } => "ADD",
            Self::Sub { .. } => "SUB",
            Self::Load { .. } => "LW",
            Self::Store { .. } => "SW",
            Self::BranchEq { .. } => "BEQ",
            Self::Jump { .. } => "J",
            Self::Output { .. } => "OUT",
            Self::Set { .. } => "SET",
        }
    }
}

impl fmt::Display for Op {
    /// Formats the operation in canonical assembly syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.mnemonic();
        match self {
            Self::Nop => f.write_str(m),
            Self::Add { rd, rs, rt } | Self::Sub { rd, rs, rt } => {
                write!(f, "{m} R{rd}, R{rs}, R{rt}")
            }
            Self::Load { rd, base, offset } => write!(f, "{m} R{rd}, {offset}(R{base})"),
            Self::Store { src, base, offset } => write!(f, "{m} R{src}, {offset}(R{base})"),
            Self::BranchEq { rs, rt, target } => write!(f, "{m} R{rs}, R{rt}, {target}"),
            Self::Jump { target } => write!(f, "{m} {target}"),
            Self::Output { port, rs } => write!(f, "{m} {port}, R{rs}"),
            Self::Set { rd, imm } => write!(f, "{m} R{rd}, {imm}"),
        }
    }
}

/// An operation together with the source text it was loaded from.
///
/// The text is only used for tracing; all behavior comes from [`Op`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// The operation.
    pub op: Op,
    /// Source text, without label or comment.
    pub text: String,
}

impl Instruction {
    /// Creates an instruction whose text is the canonical rendering of `op`.
    pub fn new(op: Op) -> Self {
        let text = op.to_string();
        Self { op, text }
    }

    /// Creates an instruction that keeps its original source text.
    pub fn with_text(op: Op, text: impl Into<String>) -> Self {
        Self {
            op,
            text: text.into(),
        }
    }

    /// A `NOP`.
    pub fn nop() -> Self {
        Self::new(Op::Nop)
    }
}

impl From<Op> for Instruction {
    fn from(op: Op) -> Self {
        Self::new(op)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
