//! Front-End Error Definitions.
//!
//! This module defines the error types reported by the front end. It provides:
//! 1. **Decode Errors:** Words the dispatch logic cannot map onto a supported instruction.
//! 2. **Memory Errors:** Out-of-range and misaligned accesses to the addressable store.
//! 3. **Register Errors:** Invalid register indices or names supplied by untrusted input.
//! 4. **Configuration Errors:** Failures while loading or validating configuration.
//!
//! Bit-field extraction itself never fails; every 32-bit pattern is structurally
//! decodable by every format.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::data::AccessType;

/// Errors raised while classifying an instruction word.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The low two bits mark a 16-bit compressed encoding.
    #[error("compressed instruction {0:#06x} is not supported")]
    Compressed(u16),

    /// No supported instruction family uses this opcode.
    #[error("unsupported opcode {opcode:#04x} in instruction {word:#010x}")]
    UnsupportedOpcode {
        /// The raw instruction word.
        word: u32,
        /// The 7-bit opcode field.
        opcode: u8,
    },

    /// The opcode is known but its funct3/funct7 combination is not.
    #[error(
        "unsupported instruction {word:#010x} (opcode {opcode:#04x}, funct3 {funct3:#03b}, funct7 {funct7:#09b})"
    )]
    UnsupportedInstruction {
        /// The raw instruction word.
        word: u32,
        /// The 7-bit opcode field.
        opcode: u8,
        /// The 3-bit funct3 field.
        funct3: u8,
        /// The 7-bit funct7 field.
        funct7: u8,
    },
}

/// Errors raised by the addressable store.
///
/// The execution layer decides how a fault maps onto a trap; the store only
/// reports what went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// Some byte of the access lies outside the mapped region.
    #[error("{access} access fault at {addr:#x} ({size} bytes)")]
    AccessFault {
        /// Operation that faulted.
        access: AccessType,
        /// Address of the first byte of the access.
        addr: u64,
        /// Width of the access in bytes.
        size: usize,
    },

    /// The address is not a multiple of the access width.
    #[error("{access} address misaligned at {addr:#x} ({size} bytes)")]
    Misaligned {
        /// Operation that faulted.
        access: AccessType,
        /// Address of the first byte of the access.
        addr: u64,
        /// Width of the access in bytes.
        size: usize,
    },
}

impl MemoryError {
    /// Returns the same fault reported for a different kind of access.
    ///
    /// Used when a fetch is serviced by an ordinary read.
    pub const fn with_access(self, access: AccessType) -> Self {
        match self {
            Self::AccessFault { addr, size, .. } => Self::AccessFault { access, addr, size },
            Self::Misaligned { addr, size, .. } => Self::Misaligned { access, addr, size },
        }
    }

    /// Returns the faulting address.
    pub const fn addr(&self) -> u64 {
        match self {
            Self::AccessFault { addr, .. } | Self::Misaligned { addr, .. } => *addr,
        }
    }
}

/// Errors raised when building register names from untrusted input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// Register index outside 0..=31.
    #[error("register index {0} is out of range (0..=31)")]
    InvalidIndex(u32),

    /// String that is neither an ABI name nor an `xN`/`fN` name.
    #[error("unknown register name `{0}`")]
    UnknownName(String),
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but describes an impossible setup.
    #[error("invalid config: {0}")]
    Invalid(String),
}
