//! Data Memory.
//!
//! Memory is an array of words addressed by byte address. An access is valid only
//! when the address is a multiple of the word size and the resulting word index is
//! inside the array. Invalid loads yield zero and invalid stores are dropped; neither
//! is a fault.

use tracing::debug;

use crate::common::constants::WORD_BYTES;
use crate::common::reg::Word;

/// Word-addressed data memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    words: Vec<Word>,
}

impl DataMemory {
    /// Creates a zero-filled memory of `words` words.
    pub fn new(words: usize) -> Self {
        Self {
            words: vec![0; words],
        }
    }

    /// Translates a byte address into a word index.
    ///
    /// # Returns
    ///
    /// `None` if the address is misaligned, negative, or past the end of memory.
    pub fn word_index(&self, addr: Word) -> Option<usize> {
        if addr % WORD_BYTES != 0 {
            return None;
        }
        let idx = usize::try_from(addr / WORD_BYTES).ok()?;
        (idx < self.words.len()).then_some(idx)
    }

    /// Loads the word at byte address `addr`.
    ///
    /// # Returns
    ///
    /// The stored word, or 0 for an invalid address.
    pub fn load(&self, addr: Word) -> Word {
        match self.word_index(addr) {
            Some(idx) => self.words[idx],
            None => {
                debug!(addr, "load from invalid address yields 0");
                0
            }
        }
    }

    /// Stores `val` at byte address `addr`. Stores to invalid addresses are dropped.
    ///
    /// # Returns
    ///
    /// `true` if memory was written.
    pub fn store(&mut self, addr: Word, val: Word) -> bool {
        match self.word_index(addr) {
            Some(idx) => {
                self.words[idx] = val;
                true
            }
            None => {
                debug!(addr, val, "store to invalid address dropped");
                false
            }
        }
    }

    /// Reads a word directly by index, bypassing address translation.
    pub fn word(&self, idx: usize) -> Option<Word> {
        self.words.get(idx).copied()
    }

    /// All words, index 0 first.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the memory has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Zero-fills the memory.
    pub fn reset(&mut self) {
        self.words.fill(0);
    }
}
