//! R4-type decoder.
//!
//! ```text
//! +-----+--------+-----+-----+--------+----+--------+
//! | rs3 | funct2 | rs2 | rs1 | funct3 | rd | opcode |
//! |31-27| 26-25  |24-20|19-15| 14-12  |11-7|  6-0   |
//! +-----+--------+-----+-----+--------+----+--------+
//! ```
//!
//! Used by the fused multiply-add family. All four register fields name
//! floating-point registers; `funct3` carries the rounding mode and `funct2`
//! the precision.

use crate::isa::abi::FpRegister;
use crate::isa::instruction::{FUNCT2, InstructionWord, RD, RS1, RS2, RS3};

instruction_format! {
    /// Fused floating-point instruction view.
    R4Type
}

impl R4Type {
    /// Destination FP register (bits 11-7).
    #[inline(always)]
    pub const fn fd(self) -> FpRegister {
        FpRegister::from_field(self.0.field(RD))
    }

    /// First FP source (bits 19-15).
    #[inline(always)]
    pub const fn fs1(self) -> FpRegister {
        FpRegister::from_field(self.0.field(RS1))
    }

    /// Second FP source (bits 24-20).
    #[inline(always)]
    pub const fn fs2(self) -> FpRegister {
        FpRegister::from_field(self.0.field(RS2))
    }

    /// Third FP source (bits 31-27).
    #[inline(always)]
    pub const fn fs3(self) -> FpRegister {
        FpRegister::from_field(self.0.field(RS3))
    }

    /// Rounding mode (bits 14-12).
    #[inline(always)]
    pub const fn funct3(self) -> u8 {
        self.0.funct3()
    }

    /// Format selector (bits 26-25): 0 = single, 1 = double.
    #[inline(always)]
    pub const fn funct2(self) -> u8 {
        self.0.field(FUNCT2) as u8
    }
}
