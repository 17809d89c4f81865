//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for maintaining pipeline consistency when data
//! dependencies exist between instructions. It provides:
//! 1. **Hazard Detection:** Identifies load-use hazards that require a one-cycle stall.
//! 2. **Operand Forwarding:** Resolves Read-After-Write (RAW) hazards by bypassing the
//!    register file with results still held in the EX/MEM and MEM/WB latches.
//!
//! Both consult the same [`Op`](crate::isa::Op) predicates as decode and writeback.

use tracing::trace;

use crate::common::reg::Word;
use crate::core::pipeline::latches::{ExMem, IdEx, IdExEntry, IfId, MemWb};
use crate::core::units::alu::OperandValues;

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction in the Decode (ID) stage reads a
/// register that the `LW` currently in the Execute (EX) stage is about to load.
/// The loaded value only exists after MEM, too late to forward into the dependent
/// instruction's EX cycle.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX pipeline latch (instruction currently in execute).
/// * `if_id` - The IF/ID pipeline latch (instruction being decoded).
///
/// # Returns
///
/// `true` if a stall is required to resolve the load-use hazard, `false` otherwise.
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    let (Some(ex), Some(id)) = (id_ex.entry(), if_id.entry()) else {
        return false;
    };
    if !ex.inst.op.is_load() {
        return false;
    }
    ex.inst
        .op
        .dest_reg()
        .is_some_and(|rd| id.inst.op.reads_register(rd))
}

/// Forwards register values from later pipeline stages to resolve data hazards.
///
/// Starting from the values read at decode, every operand slot whose source register
/// matches a pending write is replaced:
///
/// 1. from EX/MEM, if it holds a write-back instruction other than `LW`, with its ALU result;
/// 2. then from MEM/WB, if it holds a write-back instruction, with its final result.
///
/// The MEM/WB pass runs second, so when both latches write the same register the
/// older MEM/WB value is the one used. A producer targeting `R0` forwards like any
/// other, even though the register file discards the write.
///
/// # Arguments
///
/// * `id_entry` - The ID/EX entry entering the execute stage.
/// * `ex_mem` - The EX/MEM latch from the previous cycle.
/// * `mem_wb` - The MEM/WB latch from the previous cycle.
///
/// # Returns
///
/// The operand values to execute with.
pub fn forward_operands(id_entry: &IdExEntry, ex_mem: &ExMem, mem_wb: &MemWb) -> OperandValues {
    let sources = id_entry.inst.op.source_regs();
    let mut values = id_entry.operands;

    let mut apply = |dest: usize, value: Word, latch: &'static str| {
        for (slot, src) in sources.iter().enumerate() {
            if *src == Some(dest) {
                trace!(pc = id_entry.pc, slot, reg = dest, value, from = latch, "forward");
                values[slot] = value;
            }
        }
    };

    if let Some(producer) = ex_mem.entry() {
        if !producer.inst.op.is_load() {
            if let Some(rd) = producer.inst.op.dest_reg() {
                apply(rd, producer.alu, "EX/MEM");
            }
        }
    }

    if let Some(producer) = mem_wb.entry() {
        if let Some(rd) = producer.inst.op.dest_reg() {
            apply(rd, producer.result, "MEM/WB");
        }
    }

    values
}
