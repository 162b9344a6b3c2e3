//! RISC-V Floating-Point (F/D) Function Codes (funct3).
//!
//! These values are used in the `funct3` field to distinguish between
//! variants of floating-point instructions (load/store width, comparison types,
//! sign injection modes) or to carry the rounding mode.

/// Single-precision load/store width (FLW, FSW).
pub const WIDTH_W: u8 = 0b010;
/// Double-precision load/store width (FLD, FSD).
pub const WIDTH_D: u8 = 0b011;

/// Floating-point Sign Injection (Copy sign).
pub const FSGNJ: u8 = 0b000;
/// Floating-point Sign Injection Negate (Negate sign).
pub const FSGNJN: u8 = 0b001;
/// Floating-point Sign Injection XOR (XOR sign).
pub const FSGNJX: u8 = 0b010;

/// Floating-point Minimum.
pub const FMIN: u8 = 0b000;
/// Floating-point Maximum.
pub const FMAX: u8 = 0b001;

/// Floating-point Equal (FEQ).
pub const FEQ: u8 = 0b000;
/// Floating-point Less Than (FLT).
pub const FLT: u8 = 0b001;
/// Floating-point Less Than or Equal (FLE).
pub const FLE: u8 = 0b010;

/// Move Floating-Point to Integer (FMV.X.W / FMV.X.D).
pub const FMV_X: u8 = 0b000;
/// Floating-point Classify (FCLASS).
pub const FCLASS: u8 = 0b001;

/// Reserved rounding modes (`0b101`, `0b110`); `0b111` is dynamic.
pub const RM_RESERVED: [u8; 2] = [0b101, 0b110];
