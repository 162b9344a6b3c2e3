//! RISC-V Floating-Point Extensions (F and D).
//!
//! Defines the opcode and function-code tables for single- and double-precision
//! instructions. Both precisions share opcodes and differ only in the format field.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes for floating-point load, store, arithmetic, and fused ops.
//! - `funct3`: Load/store widths, comparison types, and rounding-mode values.
//! - `funct7`: Operation selectors (funct5) and format encodings.

/// Function code 3 definitions for floating-point operations.
pub mod funct3;

/// Function code 5/7 and format definitions for floating-point operations.
pub mod funct7;

/// Floating-point opcodes.
pub mod opcodes;
