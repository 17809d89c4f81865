//! Configuration system for the ASP simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline machine geometry and run limits.
//! 2. **Structures:** Hierarchical config for general run settings and machine geometry.
//! 3. **Loading:** JSON parsing and validation.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or built with
//! `Config::default()`. Every field is optional in JSON.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Print the per-cycle trace by default.
    pub const TRACE_PIPELINE: bool = true;

    /// Cycle cap for a single run.
    pub const MAX_CYCLES: u64 = constants::DEFAULT_MAX_CYCLES;

    /// Reject programs with undefined branch targets at load time.
    pub const STRICT_LABELS: bool = false;

    /// Data memory size in words (4 KiB).
    pub const MEMORY_WORDS: usize = constants::DEFAULT_MEMORY_WORDS;

    /// Number of output ports.
    pub const OUTPUT_PORTS: usize = constants::DEFAULT_OUTPUT_PORTS;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use aspsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.general.max_cycles, 200);
/// assert_eq!(config.machine.memory_words, 1024);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use aspsim_core::config::Config;
///
/// let json = r#"{ "general": { "max_cycles": 5000, "trace_pipeline": false } }"#;
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.general.max_cycles, 5000);
/// assert!(!config.general.trace_pipeline);
/// assert_eq!(config.machine.output_ports, 16);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Run-level settings.
    pub general: GeneralConfig,
    /// Machine geometry.
    pub machine: MachineConfig,
}

/// General run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// Print the per-cycle execution trace.
    pub trace_pipeline: bool,
    /// Cycle cap per run. Values below 1 are treated as 1.
    pub max_cycles: u64,
    /// Reject programs whose branches or jumps name undefined labels.
    pub strict_labels: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_pipeline: defaults::TRACE_PIPELINE,
            max_cycles: defaults::MAX_CYCLES,
            strict_labels: defaults::STRICT_LABELS,
        }
    }
}

/// Machine geometry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    /// Data memory size in 4-byte words.
    pub memory_words: usize,
    /// Number of output ports.
    pub output_ports: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            memory_words: defaults::MEMORY_WORDS,
            output_ports: defaults::OUTPUT_PORTS,
        }
    }
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] for values that fail [`Config::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks that the machine can be built from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if memory or the port bank would be empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.machine.memory_words == 0 {
            return Err(ConfigError::Invalid {
                field: "machine.memory_words",
                reason: "data memory needs at least one word".to_string(),
            });
        }
        if self.machine.output_ports == 0 {
            return Err(ConfigError::Invalid {
                field: "machine.output_ports",
                reason: "at least one output port is required".to_string(),
            });
        }
        Ok(())
    }
}
