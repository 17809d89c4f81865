//! Load and Configuration Error definitions.
//!
//! The execution engines themselves never fail: every run produces a report. Errors only
//! arise at the edges of the simulator. This module provides:
//! 1. **Load Errors:** Reading and parsing assembly source into a program.
//! 2. **Configuration Errors:** Reading, parsing, and validating JSON configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning assembly source into a [`Program`](crate::isa::Program).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("failed to read program '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An instruction's operands did not match the shape its mnemonic requires.
    #[error("line {line}: malformed operands for {mnemonic}: '{text}' ({reason})")]
    Operands {
        /// One-based source line number.
        line: usize,
        /// Upper-cased mnemonic.
        mnemonic: String,
        /// The offending source text.
        text: String,
        /// What was wrong with the operands.
        reason: String,
    },

    /// A label definition has an empty name or contains whitespace.
    #[error("line {line}: invalid label '{name}'")]
    InvalidLabel {
        /// One-based source line number.
        line: usize,
        /// The rejected label text.
        name: String,
    },

    /// A branch or jump names a label that is never defined.
    ///
    /// Only produced by [`Program::validate_labels`](crate::isa::Program::validate_labels);
    /// by default unresolved labels fall through at run time.
    #[error("instruction {index} ('{text}') references undefined label '{label}'")]
    UndefinedLabel {
        /// The missing label.
        label: String,
        /// Zero-based index of the referencing instruction.
        index: usize,
        /// Source text of the referencing instruction.
        text: String,
    },
}

/// Errors raised while loading or validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON or does not match the schema.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulator cannot run with.
    #[error("invalid config value for '{field}': {reason}")]
    Invalid {
        /// Dotted path of the field, e.g. `machine.memory_words`.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
