//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for both execution models. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, output, nop).
//! 3. **Hazards:** Load-use stalls, taken control transfers, and squashed instructions.

use std::io::{self, Write};

use serde::Serialize;

use crate::isa::instruction::InstClass;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired. In the pipeline every instruction reaching
    /// writeback counts, including `NOP`, stores, and control transfers.
    pub instructions_retired: u64,

    /// Count of ALU (`ADD`, `SUB`, `SET`) instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch/jump instructions retired.
    pub inst_branch: u64,
    /// Count of output instructions retired.
    pub inst_output: u64,
    /// Count of `NOP` instructions retired.
    pub inst_nop: u64,

    /// Bubbles inserted for load-use hazards.
    pub stalls_data: u64,
    /// Taken branches and jumps that redirected fetch.
    pub flushes: u64,
    /// Wrong-path instructions discarded by those redirects.
    pub squashed: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"core"`, `"instruction_mix"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "core", "instruction_mix"];

impl SimStats {
    /// Counts one retired instruction of the given category.
    pub const fn record_retirement(&mut self, class: InstClass) {
        self.instructions_retired += 1;
        match class {
            InstClass::Alu => self.inst_alu += 1,
            InstClass::Load => self.inst_load += 1,
            InstClass::Store => self.inst_store += 1,
            InstClass::Branch => self.inst_branch += 1,
            InstClass::Output => self.inst_output += 1,
            InstClass::Nop => self.inst_nop += 1,
        }
    }

    /// Cycles per instruction. A run that retired nothing is treated as having
    /// retired one instruction.
    pub fn cpi(&self) -> f64 {
        self.cycles as f64 / self.instructions_retired.max(1) as f64
    }

    /// Instructions per cycle, 0 for a run of zero cycles.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            return 0.0;
        }
        self.instructions_retired as f64 / self.cycles as f64
    }

    /// Writes the requested statistics sections to `out`.
    ///
    /// Each element of `sections` should be one of `"summary"`, `"core"`, or
    /// `"instruction_mix"`. Pass an empty slice to write all sections.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_sections<W: Write>(&self, out: &mut W, sections: &[String]) -> io::Result<()> {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;

        writeln!(out, "==========================================================")?;
        writeln!(out, "ASP PIPELINE SIMULATION STATISTICS")?;
        writeln!(out, "==========================================================")?;
        if want("summary") {
            writeln!(out, "sim_cycles               {}", self.cycles)?;
            writeln!(out, "sim_insts                {}", self.instructions_retired)?;
            writeln!(out, "sim_ipc                  {:.4}", self.ipc())?;
            writeln!(out, "sim_cpi                  {:.4}", self.cpi())?;
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("core") {
            writeln!(out, "CORE BREAKDOWN")?;
            writeln!(
                out,
                "  stalls.data            {} ({:.2}%)",
                self.stalls_data,
                self.stalls_data as f64 / cyc * 100.0
            )?;
            writeln!(out, "  control.flushes        {}", self.flushes)?;
            writeln!(out, "  control.squashed       {}", self.squashed)?;
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("instruction_mix") {
            writeln!(out, "INSTRUCTION MIX")?;
            for (name, count) in [
                ("op.alu   ", self.inst_alu),
                ("op.load  ", self.inst_load),
                ("op.store ", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.output", self.inst_output),
                ("op.nop   ", self.inst_nop),
            ] {
                writeln!(
                    out,
                    "  {name}              {count} ({:.2}%)",
                    count as f64 / instr * 100.0
                )?;
            }
            writeln!(out, "----------------------------------------------------------")?;
        }
        Ok(())
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written.
    pub fn print_sections(&self, sections: &[String]) -> io::Result<()> {
        self.write_sections(&mut io::stdout().lock(), sections)
    }

    /// Prints all statistics sections to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written.
    pub fn print(&self) -> io::Result<()> {
        self.print_sections(&[])
    }
}
