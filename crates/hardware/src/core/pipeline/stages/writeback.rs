//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It commits
//! the MEM/WB result to the register file, or to an output port for `OUT`, and
//! reports the retirement. Writeback runs first in every cycle, so a value committed
//! here is visible to the decode stage of the same cycle.

use tracing::trace;

use crate::core::arch::ports::OutputEvent;
use crate::core::arch::state::ArchState;
use crate::core::pipeline::latches::MemWb;
use crate::isa::instruction::{InstClass, Op};

/// An instruction leaving the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retirement {
    /// Instruction index.
    pub pc: usize,
    /// Instruction category.
    pub class: InstClass,
    /// Output port write committed by an `OUT`, if any.
    pub output: Option<OutputEvent>,
}

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `mem_wb` - The MEM/WB latch from the previous cycle.
/// * `state` - Architectural state; only registers and output ports are touched.
///
/// # Returns
///
/// The retirement, or `None` if MEM/WB held a bubble. Every occupied latch retires,
/// including `NOP`, `SW`, `BEQ`, and `J`.
pub fn wb_stage(mem_wb: &MemWb, state: &mut ArchState) -> Option<Retirement> {
    let entry = mem_wb.entry()?;
    trace!(pc = entry.pc, "WB  {}", entry.inst);

    let mut output = None;
    if let Some(rd) = entry.inst.op.dest_reg() {
        state.regs.write(rd, entry.result);
    } else if let Op::Output { port, .. } = entry.inst.op {
        output = state.ports.write(port, entry.result);
    }

    Some(Retirement {
        pc: entry.pc,
        class: entry.inst.op.class(),
        output,
    })
}
