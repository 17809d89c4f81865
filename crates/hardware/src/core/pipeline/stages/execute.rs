//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline. It forwards
//! pending results into the operands, evaluates the ALU, and resolves branches and
//! jumps. A taken transfer is reported to the engine, which squashes the
//! wrong-path instructions in IF/ID and ID/EX.

use tracing::{debug, trace};

use crate::core::pipeline::hazards::forward_operands;
use crate::core::pipeline::latches::{ExMem, ExMemEntry, IdEx, MemWb};
use crate::core::units::alu::Alu;
use crate::core::units::bru;
use crate::isa::labels::LabelTable;

/// Result of the execute stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecuteOutcome {
    /// Next EX/MEM latch.
    pub ex_mem: ExMem,
    /// Target instruction index of a taken branch or jump.
    pub redirect: Option<usize>,
}

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch from the previous cycle.
/// * `ex_mem` - The EX/MEM latch from the previous cycle (forwarding source).
/// * `mem_wb` - The MEM/WB latch from the previous cycle (forwarding source).
/// * `labels` - The program's label table.
///
/// # Returns
///
/// The next EX/MEM latch and the redirect target, if any.
pub fn execute_stage(
    id_ex: &IdEx,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
    labels: &LabelTable,
) -> ExecuteOutcome {
    let Some(entry) = id_ex.entry() else {
        return ExecuteOutcome::default();
    };

    let operands = forward_operands(entry, ex_mem, mem_wb);
    let out = Alu::execute(&entry.inst.op, &operands);
    let redirect = bru::resolve(&entry.inst.op, &operands, labels);

    trace!(pc = entry.pc, alu = out.result, "EX  {}", entry.inst);
    if let Some(target) = redirect {
        debug!(pc = entry.pc, target, "{} taken", entry.inst.op.mnemonic());
    }

    ExecuteOutcome {
        ex_mem: ExMem::holding(ExMemEntry {
            pc: entry.pc,
            inst: entry.inst.clone(),
            alu: out.result,
            store_data: out.store_data,
        }),
        redirect,
    }
}
