//! Global Front-End Constants.
//!
//! This module defines constants shared by the decoder, register file, and memory. It includes:
//! 1. **Instruction Constants:** Instruction sizes and the compressed-encoding marker.
//! 2. **Register Constants:** Architectural register counts.
//! 3. **Memory Constants:** Default placement and size of the addressable store.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_32: u64 = 4;

/// Bit mask for checking if an instruction is compressed.
pub const COMPRESSED_INSTRUCTION_MASK: u32 = 0x3;

/// Value of the low two bits for every uncompressed (32-bit) instruction.
pub const UNCOMPRESSED_INSTRUCTION_VALUE: u32 = 0x3;

/// Number of architectural general-purpose registers (`x0`-`x31`).
pub const NUM_REGISTERS: usize = 32;

/// Number of architectural floating-point registers (`f0`-`f31`).
pub const NUM_FP_REGISTERS: usize = 32;

/// Default base address of the addressable store (2 GiB).
pub const DEFAULT_MEMORY_BASE: u64 = 0x8000_0000;

/// Default size of the addressable store (1 MiB).
pub const DEFAULT_MEMORY_SIZE: usize = 1024 * 1024;
