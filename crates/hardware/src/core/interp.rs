//! Single-cycle reference interpreter.
//!
//! Executes one instruction to completion per cycle with no overlap, using the same
//! ALU, branch unit, memory rules, and port rules as the pipeline. Its final state is
//! the oracle the pipelined model is checked against.

use tracing::trace;

use crate::core::arch::state::ArchState;
use crate::core::pipeline::stages::Retirement;
use crate::core::units::alu::{Alu, OperandValues};
use crate::core::units::bru;
use crate::isa::instruction::Op;
use crate::isa::program::Program;
use crate::stats::SimStats;
use crate::trace::Observer;

/// Single-cycle interpreter state.
#[derive(Clone, Debug, Default)]
pub struct SingleCycle {
    /// Program counter: index of the next instruction to execute.
    pub pc: usize,
    /// Performance counters.
    pub stats: SimStats,
}

impl SingleCycle {
    /// Creates an interpreter with PC 0 and zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once the PC has run off the end of `program`.
    pub fn is_done(&self, program: &Program) -> bool {
        self.pc >= program.len()
    }

    /// Executes the instruction at the PC.
    ///
    /// # Arguments
    ///
    /// * `state` - Architectural state the program runs against.
    /// * `program` - The program being executed.
    /// * `observer` - Receives the step and any output event.
    ///
    /// # Returns
    ///
    /// The retired instruction, or `None` if the PC is already past the end.
    pub fn step(
        &mut self,
        state: &mut ArchState,
        program: &Program,
        observer: &mut dyn Observer,
    ) -> Option<Retirement> {
        let inst = program.get(self.pc)?;
        self.stats.cycles += 1;
        observer.on_step(self.stats.cycles, self.pc, inst);
        trace!(pc = self.pc, "EXEC {inst}");

        let mut operands: OperandValues = [0; 3];
        for (value, src) in operands.iter_mut().zip(inst.op.source_regs()) {
            if let Some(reg) = src {
                *value = state.regs.read(reg);
            }
        }

        let out = Alu::execute(&inst.op, &operands);
        let mut output = None;
        match inst.op {
            Op::Load { rd, .. } => state.regs.write(rd, state.memory.load(out.result)),
            Op::Store { .. } => {
                let _ = state.memory.store(out.result, out.store_data);
            }
            Op::Output { port, .. } => {
                output = state.ports.write(port, out.result);
                if let Some(event) = output {
                    observer.on_output(event.port, event.value);
                }
            }
            _ => {
                if let Some(rd) = inst.op.dest_reg() {
                    state.regs.write(rd, out.result);
                }
            }
        }

        let retired = Retirement {
            pc: self.pc,
            class: inst.op.class(),
            output,
        };
        self.pc = bru::resolve(&inst.op, &operands, program.labels()).unwrap_or(self.pc + 1);
        self.stats.record_retirement(retired.class);
        Some(retired)
    }
}
