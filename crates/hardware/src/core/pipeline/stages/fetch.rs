//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It presents
//! the instruction at the program counter to decode, unless a taken branch
//! redirects the PC or a load-use stall holds the current IF/ID contents.

use tracing::trace;

use crate::core::pipeline::latches::{IfId, IfIdEntry};
use crate::isa::program::Program;

/// Result of the fetch stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Next IF/ID latch.
    pub if_id: IfId,
    /// Next program counter.
    pub pc: usize,
}

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `pc` - Current program counter (instruction index).
/// * `if_id` - The IF/ID latch from the previous cycle.
/// * `program` - The program being executed.
/// * `redirect` - Target of a branch or jump taken in execute this cycle.
/// * `stall` - `true` if decode inserted a load-use stall this cycle.
///
/// # Returns
///
/// The next IF/ID latch and program counter. A redirect empties IF/ID and moves the
/// PC to the target without fetching; a stall re-presents IF/ID and keeps the PC;
/// otherwise `program[pc]` is fetched and the PC advances, or IF/ID is left empty
/// once the PC is past the end of the program.
pub fn fetch_stage(
    pc: usize,
    if_id: &IfId,
    program: &Program,
    redirect: Option<usize>,
    stall: bool,
) -> FetchOutcome {
    if let Some(target) = redirect {
        return FetchOutcome {
            if_id: IfId::empty(),
            pc: target,
        };
    }
    if stall {
        return FetchOutcome {
            if_id: if_id.clone(),
            pc,
        };
    }
    match program.get(pc) {
        Some(inst) => {
            trace!(pc, "IF  {inst}");
            FetchOutcome {
                if_id: IfId::holding(IfIdEntry {
                    pc,
                    inst: inst.clone(),
                }),
                pc: pc + 1,
            }
        }
        None => FetchOutcome {
            if_id: IfId::empty(),
            pc,
        },
    }
}
