//! ASP pipeline simulator library.
//!
//! This crate simulates programs for the ASP teaching ISA on two execution models:
//! 1. **Core:** A five-stage pipeline (fetch, decode, execute, memory, writeback) with
//!    load-use stalls, operand forwarding, and branch flushing, plus a single-cycle
//!    reference interpreter.
//! 2. **ISA:** The closed instruction set, labels, and program container.
//! 3. **Simulation:** Assembly loader, run drivers, configuration, statistics, and
//!    execution observers.

/// Common types and constants (registers, words, errors).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// Execution models (architectural state, units, pipeline, interpreter).
pub mod core;
/// Instruction set (instructions, labels, programs).
pub mod isa;
/// Assembly loader and run drivers.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Observer interface for per-cycle execution events.
pub mod trace;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Loaded program: instructions plus labels.
pub use crate::isa::Program;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
