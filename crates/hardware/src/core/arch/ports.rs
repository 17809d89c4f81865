//! Output ports.
//!
//! Each port holds the last value written to it by an `OUT` instruction. Every
//! commit is also appended to an ordered history, which is what the two execution
//! models are compared on.

use serde::Serialize;
use tracing::warn;

use crate::common::reg::Word;

/// One committed `OUT` write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OutputEvent {
    /// Port index.
    pub port: usize,
    /// Value written.
    pub value: Word,
}

/// Output port bank with commit history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPorts {
    values: Vec<Word>,
    history: Vec<OutputEvent>,
}

impl OutputPorts {
    /// Creates `count` ports, all zero, with an empty history.
    pub fn new(count: usize) -> Self {
        Self {
            values: vec![0; count],
            history: Vec::new(),
        }
    }

    /// Writes `value` to `port`.
    ///
    /// Writes to a port outside the bank are dropped.
    ///
    /// # Returns
    ///
    /// The committed event, or `None` if the write was dropped.
    pub fn write(&mut self, port: usize, value: Word) -> Option<OutputEvent> {
        let Some(slot) = self.values.get_mut(port) else {
            warn!(port, value, ports = self.values.len(), "output to nonexistent port dropped");
            return None;
        };
        *slot = value;
        let event = OutputEvent { port, value };
        self.history.push(event);
        Some(event)
    }

    /// Last value written to `port`, or `None` if the port does not exist.
    pub fn read(&self, port: usize) -> Option<Word> {
        self.values.get(port).copied()
    }

    /// Current value of every port.
    pub fn values(&self) -> &[Word] {
        &self.values
    }

    /// All committed writes in commit order.
    pub fn history(&self) -> &[OutputEvent] {
        &self.history
    }

    /// Zeroes every port and clears the history.
    pub fn reset(&mut self) {
        self.values.fill(0);
        self.history.clear();
    }
}
