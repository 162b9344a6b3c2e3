//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) is used in R-type instructions to
//! distinguish between operations that share the same `funct3` (e.g., ADD vs SUB).
//! Shift-immediate words reuse the upper bits the same way.

/// Default operation (ADD, SRL, etc.).
pub const DEFAULT: u8 = 0b0000000;

/// Alternate operation (SUB, SRA).
/// Used to distinguish SUB from ADD, and SRA from SRL.
pub const SUB: u8 = 0b0100000;
/// Alias for SUB (used for Shift Right Arithmetic).
pub const SRA: u8 = 0b0100000;

/// Upper six bits (31-26) of an RV64 logical shift-immediate.
pub const SHIFT_LOGICAL_6: u8 = 0b000000;
/// Upper six bits (31-26) of an RV64 arithmetic shift-immediate.
pub const SHIFT_ARITH_6: u8 = 0b010000;
