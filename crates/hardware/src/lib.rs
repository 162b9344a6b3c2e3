//! RISC-V instruction front end.
//!
//! This crate turns raw 32-bit RISC-V instruction words into typed views of their
//! fields, and provides the storage those words are fetched from:
//! 1. **ISA:** Field extraction, R/I/S/B/U/J/R4 format decoders, opcode dispatch, and disassembly.
//! 2. **Architectural State:** Register cells and a register file with `x0` hardwired to zero.
//! 3. **SoC:** The addressable memory trait and a bounds-checked flat memory.
//! 4. **Configuration:** JSON-loadable memory layout and enabled extension groups.
//!
//! # Example
//!
//! ```
//! use rvdec_core::isa::decode::{Instruction, decode};
//! use rvdec_core::isa::abi::RegisterAlias;
//!
//! let inst = decode(0xFFF0_0093_u32).unwrap(); // addi ra, zero, -1
//! assert!(matches!(inst, Instruction::I(_)));
//! assert_eq!(inst.rd(), Some(RegisterAlias::Ra));
//! assert_eq!(inst.imm(), Some(-1));
//! ```

/// Common types and constants (errors, access types, register file).
pub mod common;
/// Front-end configuration (memory layout, enabled extensions).
pub mod config;
/// Architectural state (register cells, GPR/FPR files).
pub mod core;
/// Instruction set (word, formats, decode, disassembly, ABI names, opcode tables).
pub mod isa;
/// System-on-chip storage (addressable memory trait, flat memory).
pub mod soc;

/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Register file with `x0` hardwired to zero.
pub use crate::common::reg::RegisterFile;
/// Classified instruction and the entry points that produce it.
pub use crate::isa::decode::{Decoder, Instruction, decode};
/// Raw 32-bit instruction word.
pub use crate::isa::instruction::InstructionWord;
/// Flat addressable memory.
pub use crate::soc::Memory;
