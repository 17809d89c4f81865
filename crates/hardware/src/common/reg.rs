//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct holding the sixteen general-purpose
//! registers. It provides:
//! 1. **Storage:** Sixteen signed 32-bit registers (`R0`-`R15`).
//! 2. **Invariant Enforcement:** `R0` reads as zero and ignores writes.
//! 3. **Observability:** Snapshots and a formatted dump of the register state.

use std::fmt;

use crate::common::constants::{NUM_REGS, REG_ZERO};

/// A machine word. All register, memory, and port values are 32-bit signed integers
/// with wrapping arithmetic.
pub type Word = i32;

/// General-purpose register file. Register `R0` is hard-wired to zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [Word; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15). `R0` and out-of-range indices read as 0.
    ///
    /// # Returns
    ///
    /// The value stored in the specified register.
    pub fn read(&self, idx: usize) -> Word {
        if idx == REG_ZERO {
            return 0;
        }
        self.regs.get(idx).copied().unwrap_or(0)
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15). Writes to `R0` and out-of-range indices are ignored.
    /// * `val` - The value to write.
    pub fn write(&mut self, idx: usize, val: Word) {
        if idx == REG_ZERO {
            return;
        }
        if let Some(slot) = self.regs.get_mut(idx) {
            *slot = val;
        }
    }

    /// Resets every register to zero.
    pub fn reset(&mut self) {
        self.regs = [0; NUM_REGS];
    }

    /// Returns a copy of all register values, `R0` first.
    pub const fn snapshot(&self) -> [Word; NUM_REGS] {
        self.regs
    }
}

impl fmt::Display for RegisterFile {
    /// Formats the registers as `R00=0 R01=5 ...` on one line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.regs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "R{i:02}={val}")?;
        }
        Ok(())
    }
}
