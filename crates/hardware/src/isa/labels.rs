//! Label table.
//!
//! Maps label names to zero-based instruction indices. A label may point one past
//! the last instruction, in which case transferring control to it ends the program.

use std::collections::HashMap;

/// Label name to instruction index mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelTable {
    entries: HashMap<String, usize>,
}

impl LabelTable {
    /// Creates an empty label table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `name` at instruction index `index`.
    ///
    /// The first definition of a name wins; later definitions are ignored.
    ///
    /// # Returns
    ///
    /// `true` if the label was newly defined, `false` if it already existed.
    pub fn define(&mut self, name: impl Into<String>, index: usize) -> bool {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return false;
        }
        let _ = self.entries.insert(name, index);
        true
    }

    /// Looks up the instruction index of `name`.
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.entries.get(name).copied()
    }

    /// Returns `true` if `name` is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of defined labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no labels are defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for LabelTable {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, index) in iter {
            let _ = table.define(name, index);
        }
        table
    }
}
