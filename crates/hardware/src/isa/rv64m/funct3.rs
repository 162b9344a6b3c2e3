//! RISC-V M-Extension Function Codes (funct3).
//!
//! Identifies the multiply or divide operation when `funct7 == M_EXTENSION`.
//! Under `OP_REG_32` only MUL, DIV, DIVU, REM, and REMU exist (as the `*W` forms).

/// Multiply, low half of the product.
pub const MUL: u8 = 0b000;
/// Multiply, high half (signed × signed).
pub const MULH: u8 = 0b001;
/// Multiply, high half (signed × unsigned).
pub const MULHSU: u8 = 0b010;
/// Multiply, high half (unsigned × unsigned).
pub const MULHU: u8 = 0b011;
/// Signed division.
pub const DIV: u8 = 0b100;
/// Unsigned division.
pub const DIVU: u8 = 0b101;
/// Signed remainder.
pub const REM: u8 = 0b110;
/// Unsigned remainder.
pub const REMU: u8 = 0b111;
