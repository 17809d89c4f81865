//! Core processor implementation.
//!
//! This module contains both execution models and the pieces they share: the
//! architectural state, the execution units, the five-stage pipeline, and the
//! single-cycle reference interpreter.

/// Architectural state (registers, data memory, output ports).
pub mod arch;

/// Single-cycle reference interpreter.
pub mod interp;

/// Instruction pipeline implementation (engine, stages, latches, hazards).
pub mod pipeline;

/// Execution units (ALU, branch resolution).
pub mod units;

pub use self::arch::ArchState;
pub use self::interp::SingleCycle;
pub use self::pipeline::Pipeline;
