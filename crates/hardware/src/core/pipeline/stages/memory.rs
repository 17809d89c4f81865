//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline. Loads read
//! data memory, stores write it, and every other instruction passes its ALU result
//! through to writeback. Misaligned or out-of-range addresses follow the
//! [`DataMemory`] rules: loads yield 0 and stores are dropped.

use tracing::trace;

use crate::core::arch::memory::DataMemory;
use crate::core::pipeline::latches::{ExMem, MemWb, MemWbEntry};
use crate::isa::instruction::Op;

/// Executes the memory access stage of the pipeline.
///
/// # Arguments
///
/// * `ex_mem` - The EX/MEM latch from the previous cycle.
/// * `memory` - Data memory.
///
/// # Returns
///
/// The next MEM/WB latch: the loaded word for `LW`, 0 for `SW`, and the ALU result
/// for everything else. Empty if EX/MEM held a bubble.
pub fn mem_stage(ex_mem: &ExMem, memory: &mut DataMemory) -> MemWb {
    let Some(entry) = ex_mem.entry() else {
        return MemWb::empty();
    };

    let result = match entry.inst.op {
        Op::Load { .. } => {
            let data = memory.load(entry.alu);
            trace!(pc = entry.pc, addr = entry.alu, data, "MEM load");
            data
        }
        Op::Store { .. } => {
            let _ = memory.store(entry.alu, entry.store_data);
            trace!(pc = entry.pc, addr = entry.alu, data = entry.store_data, "MEM store");
            0
        }
        _ => entry.alu,
    };

    MemWb::holding(MemWbEntry {
        pc: entry.pc,
        inst: entry.inst.clone(),
        result,
    })
}
