//! Simulation drivers and program loading.
//!
//! Provides the assembly loader and the run-to-completion entry points for both
//! execution models.

/// Assembly source loader.
pub mod loader;

/// Run drivers and reports.
pub mod simulator;

pub use simulator::{CycleCap, ExecutionModel, RunReport, Simulator, StopReason};
