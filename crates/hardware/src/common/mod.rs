//! Common utilities and types used throughout the front end.
//!
//! This module provides fundamental building blocks shared by the decoder, the
//! register file, and the addressable store. It includes:
//! 1. **Constants:** Instruction sizes, register counts, and memory defaults.
//! 2. **Memory Access:** Definitions for categorizing memory operations (Fetch/Read/Write).
//! 3. **Error Handling:** Decode, memory, register, and configuration errors.
//! 4. **Register Management:** A unified interface for GPR and FPR access.

/// Common constants used throughout the front end.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for decoding, memory access, registers, and configuration.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::AccessType;
pub use error::{ConfigError, DecodeError, MemoryError, RegisterError};
pub use reg::RegisterFile;
