//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline. It reads
//! the operand registers of the IF/ID instruction, after writeback has committed
//! for the cycle, and checks for a load-use hazard against the instruction entering
//! execute. On a hazard it emits a bubble and asks fetch to hold IF/ID.

use tracing::trace;

use crate::common::reg::RegisterFile;
use crate::core::pipeline::hazards::need_stall_load_use;
use crate::core::pipeline::latches::{IdEx, IdExEntry, IfId};
use crate::core::units::alu::OperandValues;

/// Result of the decode stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Next ID/EX latch.
    pub id_ex: IdEx,
    /// `true` if a load-use stall was inserted this cycle.
    pub stall: bool,
}

/// Executes the instruction decode stage of the pipeline.
///
/// # Arguments
///
/// * `if_id` - The IF/ID latch from the previous cycle.
/// * `id_ex` - The ID/EX latch from the previous cycle (hazard check).
/// * `regs` - Register file, already updated by this cycle's writeback.
///
/// # Returns
///
/// The next ID/EX latch and whether a stall was inserted.
pub fn decode_stage(if_id: &IfId, id_ex: &IdEx, regs: &RegisterFile) -> DecodeOutcome {
    let Some(entry) = if_id.entry() else {
        return DecodeOutcome::default();
    };

    if need_stall_load_use(id_ex, if_id) {
        trace!(pc = entry.pc, "ID  {} (load-use stall)", entry.inst);
        return DecodeOutcome {
            id_ex: IdEx::empty(),
            stall: true,
        };
    }

    let mut operands: OperandValues = [0; 3];
    for (value, src) in operands.iter_mut().zip(entry.inst.op.source_regs()) {
        if let Some(reg) = src {
            *value = regs.read(reg);
        }
    }
    trace!(pc = entry.pc, ?operands, "ID  {}", entry.inst);

    DecodeOutcome {
        id_ex: IdEx::holding(IdExEntry {
            pc: entry.pc,
            inst: entry.inst.clone(),
            operands,
        }),
        stall: false,
    }
}
