//! Pipeline Latch Interface.
//!
//! This module defines the common trait for inter-stage buffers.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of instructions as they move between stages. They support
/// flushing and status checks.
pub trait PipelineLatch {
    /// Clears the latch.
    ///
    /// Called when a taken branch or jump squashes wrong-path instructions.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if the latch holds no instruction, `false` otherwise.
    fn is_empty(&self) -> bool;
}
