//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Register Constants:** Register count and the hard-wired zero register.
//! 2. **Memory Constants:** Word size and the default data memory geometry.
//! 3. **Simulation Constants:** Default cycle cap and output port count.

/// Number of architectural registers (`R0`-`R15`).
pub const NUM_REGS: usize = 16;

/// Index of the hard-wired zero register.
pub const REG_ZERO: usize = 0;

/// Size of a machine word in bytes. Data memory addresses are byte addresses
/// and must be a multiple of this value.
pub const WORD_BYTES: i32 = 4;

/// Default number of words in data memory.
pub const DEFAULT_MEMORY_WORDS: usize = 1024;

/// Default number of output ports.
pub const DEFAULT_OUTPUT_PORTS: usize = 16;

/// Default cycle cap for a single run.
pub const DEFAULT_MAX_CYCLES: u64 = 200;
