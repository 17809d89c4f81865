//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** One entry type per latch, each carrying the originating PC,
//!    the instruction, and the payload the next stage needs.
//! 2. **Occupancy:** Every latch is a [`Latch`], either empty (a bubble) or holding
//!    exactly one entry, so a payload without an instruction cannot be represented.

use crate::common::reg::Word;
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::units::alu::OperandValues;
use crate::isa::instruction::Instruction;

/// A single-slot pipeline latch: empty, or holding one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Latch<T> {
    slot: Option<T>,
}

impl<T> Latch<T> {
    /// An empty latch (bubble).
    pub const fn empty() -> Self {
        Self { slot: None }
    }

    /// A latch holding `entry`.
    pub const fn holding(entry: T) -> Self {
        Self { slot: Some(entry) }
    }

    /// The held entry, if any.
    pub const fn entry(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Returns `true` if the latch holds an entry.
    pub const fn is_occupied(&self) -> bool {
        self.slot.is_some()
    }
}

impl<T> Default for Latch<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Latch<T> {
    fn from(slot: Option<T>) -> Self {
        Self { slot }
    }
}

impl<T> PipelineLatch for Latch<T> {
    fn flush(&mut self) {
        self.slot = None;
    }

    fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Instruction index the entry was fetched from.
    pub pc: usize,
    /// Fetched instruction.
    pub inst: Instruction,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Instruction index.
    pub pc: usize,
    /// Decoded instruction.
    pub inst: Instruction,
    /// Register values read at decode, one per operand slot.
    pub operands: OperandValues,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Instruction index.
    pub pc: usize,
    /// Executed instruction.
    pub inst: Instruction,
    /// ALU result (or effective address for loads and stores).
    pub alu: Word,
    /// Value to store (stores only).
    pub store_data: Word,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Instruction index.
    pub pc: usize,
    /// Instruction awaiting writeback.
    pub inst: Instruction,
    /// Final result: loaded word for loads, 0 for stores, ALU result otherwise.
    pub result: Word,
}

/// IF/ID latch.
pub type IfId = Latch<IfIdEntry>;
/// ID/EX latch.
pub type IdEx = Latch<IdExEntry>;
/// EX/MEM latch.
pub type ExMem = Latch<ExMemEntry>;
/// MEM/WB latch.
pub type MemWb = Latch<MemWbEntry>;

/// The four inter-stage latches as seen at one cycle boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Latches {
    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MEM latch.
    pub ex_mem: ExMem,
    /// MEM/WB latch.
    pub mem_wb: MemWb,
}

impl Latches {
    /// Empties IF/ID and ID/EX, the two latches behind a control transfer
    /// resolved in execute.
    pub fn squash_wrong_path(&mut self) {
        self.if_id.flush();
        self.id_ex.flush();
    }

    /// Returns `true` if no latch holds an instruction.
    pub fn all_empty(&self) -> bool {
        self.if_id.is_empty()
            && self.id_ex.is_empty()
            && self.ex_mem.is_empty()
            && self.mem_wb.is_empty()
    }
}
