//! Configuration system for the instruction front end.
//!
//! This module defines the configuration structures used to parameterize the
//! front end. It provides:
//! 1. **Defaults:** Baseline constants for the memory map and enabled extensions.
//! 2. **Structures:** Hierarchical config for general, memory, and decode settings.
//! 3. **Loading:** JSON parsing from strings or files, followed by validation.
//!
//! Every field has a default, so an empty JSON object (`{}`) is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Default configuration constants for the front end.
///
/// These values define the baseline setup when not explicitly overridden in
/// JSON configuration files.
mod defaults {
    use crate::common::constants::{DEFAULT_MEMORY_BASE, DEFAULT_MEMORY_SIZE};

    /// Base address of the addressable store (2 GiB, the conventional RAM base).
    pub const MEMORY_BASE: u64 = DEFAULT_MEMORY_BASE;

    /// Size of the addressable store (1 MiB).
    pub const MEMORY_SIZE: usize = DEFAULT_MEMORY_SIZE;

    /// Misaligned accesses fault unless explicitly allowed.
    pub const ENFORCE_ALIGNMENT: bool = true;

    /// Extension groups are enabled unless explicitly disabled.
    pub const EXTENSION_ENABLED: bool = true;
}

/// Root configuration structure for the front end.
///
/// Deserialize from JSON with [`Config::from_json`] or [`Config::from_file`], or
/// use `Config::default()`.
///
/// # Example
///
/// ```
/// use rvdec_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_decode": true },
///     "memory": { "base": 4096, "size": 65536 },
///     "decode": { "float": false }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_decode);
/// assert_eq!(config.memory.base, 0x1000);
/// assert!(config.memory.enforce_alignment);
/// assert!(!config.decode.float);
/// assert!(config.decode.mul_div);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General front-end settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Addressable store layout and access policy
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Enabled instruction groups
    #[serde(default)]
    pub decode: DecodeConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown value types,
    /// and [`ConfigError::Invalid`] if the parsed values fail [`Config::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks that the configuration describes a usable setup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the memory size is zero or the
    /// region `[base, base + size)` does not fit in the 64-bit address space.
    /// A region may end exactly at 2^64.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory.size == 0 {
            return Err(ConfigError::Invalid("memory.size must be non-zero".into()));
        }
        // The last byte, not the exclusive end, must be addressable.
        let last = (self.memory.size - 1) as u64;
        if self.memory.base.checked_add(last).is_none() {
            return Err(ConfigError::Invalid(format!(
                "memory region {:#x} + {:#x} overflows the address space",
                self.memory.base, self.memory.size
            )));
        }
        Ok(())
    }
}

/// General front-end settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Emit a trace event for every decoded word in the CLI
    #[serde(default)]
    pub trace_decode: bool,
}

/// Addressable store configuration.
///
/// Specifies where the store is mapped, how large it is, and whether accesses
/// must be naturally aligned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemoryConfig {
    /// Base address of the store
    #[serde(default = "MemoryConfig::default_base")]
    pub base: u64,

    /// Store size in bytes
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Fault on accesses whose address is not a multiple of their width
    #[serde(default = "MemoryConfig::default_enforce_alignment")]
    pub enforce_alignment: bool,
}

impl MemoryConfig {
    /// Returns the default base address.
    fn default_base() -> u64 {
        defaults::MEMORY_BASE
    }

    /// Returns the default store size in bytes.
    fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }

    /// Returns the default alignment policy.
    fn default_enforce_alignment() -> bool {
        defaults::ENFORCE_ALIGNMENT
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            base: defaults::MEMORY_BASE,
            size: defaults::MEMORY_SIZE,
            enforce_alignment: defaults::ENFORCE_ALIGNMENT,
        }
    }
}

/// Instruction groups accepted by the decoder.
///
/// Disabling a group makes its words decode as unsupported rather than
/// changing how fields are extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DecodeConfig {
    /// Accept RV64-only words (OP-32, OP-IMM-32, LD, LWU, SD, 6-bit shift amounts)
    #[serde(default = "DecodeConfig::default_enabled")]
    pub rv64: bool,

    /// Accept the M extension (multiply/divide)
    #[serde(default = "DecodeConfig::default_enabled")]
    pub mul_div: bool,

    /// Accept the F/D extensions (FP loads/stores, OP-FP, fused multiply-add)
    #[serde(default = "DecodeConfig::default_enabled")]
    pub float: bool,
}

impl DecodeConfig {
    /// Returns the default enablement of an extension group.
    fn default_enabled() -> bool {
        defaults::EXTENSION_ENABLED
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            rv64: defaults::EXTENSION_ENABLED,
            mul_div: defaults::EXTENSION_ENABLED,
            float: defaults::EXTENSION_ENABLED,
        }
    }
}
