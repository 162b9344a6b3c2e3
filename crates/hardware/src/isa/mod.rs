//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the instruction word type, the per-format decoders, the dispatch
//! logic that chooses between them, and the opcode and function-code tables,
//! organized by RISC-V extension.
//!
//! # Extensions
//!
//! * `rv64i`: Base Integer Instruction Set (64-bit).
//! * `rv64m`: Standard Extension for Integer Multiplication and Division.
//! * `rv64f`: Standard Extensions for Single- and Double-Precision Floating-Point.
//! * `privileged`: SYSTEM opcode encodings (ECALL, xRET, CSR access).

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Opcode-keyed dispatch into the [`decode::Instruction`] enum.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Per-format decoders (R, I, S, B, U, J, R4).
pub mod format;

/// Instruction words and bit-field extraction utilities.
pub mod instruction;

/// SYSTEM instruction encodings.
pub mod privileged;

/// Single- and double-precision floating-point opcodes and function codes.
pub mod rv64f;

/// Base integer instruction set (64-bit RISC-V core instructions).
pub mod rv64i;

/// Integer multiply/divide extension (MUL, DIV, REM instructions).
pub mod rv64m;

pub use decode::{Decoder, Instruction, decode, format_of};
pub use format::Format;
pub use instruction::InstructionWord;
