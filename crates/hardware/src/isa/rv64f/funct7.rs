//! RISC-V Floating-Point (F/D) Function Codes (funct5 / fmt).
//!
//! For `OP_FP` words the `funct7` field (bits 31-25) splits into a 5-bit
//! operation selector (bits 31-27) and a 2-bit format (bits 26-25). The same
//! format encoding appears as `funct2` in R4 words.

/// Single-precision format (`.s`).
pub const FMT_S: u8 = 0b00;
/// Double-precision format (`.d`).
pub const FMT_D: u8 = 0b01;

/// Floating-point Add.
pub const FADD: u8 = 0b00000;
/// Floating-point Subtract.
pub const FSUB: u8 = 0b00001;
/// Floating-point Multiply.
pub const FMUL: u8 = 0b00010;
/// Floating-point Divide.
pub const FDIV: u8 = 0b00011;
/// Floating-point Sign Injection.
pub const FSGNJ: u8 = 0b00100;
/// Floating-point Min/Max.
pub const FMIN_MAX: u8 = 0b00101;
/// Convert between single and double precision.
pub const FCVT_FMT: u8 = 0b01000;
/// Floating-point Square Root.
pub const FSQRT: u8 = 0b01011;
/// Floating-point Compare.
pub const FCMP: u8 = 0b10100;
/// Convert Float to Integer.
pub const FCVT_INT_F: u8 = 0b11000;
/// Convert Integer to Float.
pub const FCVT_F_INT: u8 = 0b11010;
/// Move Float to Integer / Classify.
pub const FMV_X_FCLASS: u8 = 0b11100;
/// Move Integer to Float.
pub const FMV_F_X: u8 = 0b11110;
