//! Common utilities and types used throughout the ASP simulator.
//!
//! This module provides fundamental building blocks shared by the instruction model,
//! both execution models, and the loader. It includes:
//! 1. **Constants:** Machine geometry (register count, word size) and run defaults.
//! 2. **Error Handling:** Load and configuration error types.
//! 3. **Register Management:** The architectural register file with a hard-wired zero register.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for program loading and configuration.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{NUM_REGS, REG_ZERO, WORD_BYTES};
pub use error::{ConfigError, LoadError};
pub use reg::{RegisterFile, Word};
