//! R-type decoder.
//!
//! ```text
//! +--------+-----+-----+--------+----+--------+
//! | funct7 | rs2 | rs1 | funct3 | rd | opcode |
//! | 31-25  |24-20|19-15| 14-12  |11-7|  6-0   |
//! +--------+-----+-----+--------+----+--------+
//! ```
//!
//! Used by register-register arithmetic (OP, OP-32) and floating-point
//! arithmetic (OP-FP). There is no immediate.

use crate::isa::abi::RegisterAlias;
use crate::isa::instruction::InstructionWord;

instruction_format! {
    /// Register-register instruction view.
    RType
}

impl RType {
    /// Destination register (bits 11-7).
    #[inline(always)]
    pub const fn rd(self) -> RegisterAlias {
        self.0.rd()
    }

    /// First source register (bits 19-15).
    #[inline(always)]
    pub const fn rs1(self) -> RegisterAlias {
        self.0.rs1()
    }

    /// Second source register (bits 24-20).
    #[inline(always)]
    pub const fn rs2(self) -> RegisterAlias {
        self.0.rs2()
    }

    /// funct3 opcode extension (bits 14-12).
    #[inline(always)]
    pub const fn funct3(self) -> u8 {
        self.0.funct3()
    }

    /// funct7 opcode extension (bits 31-25).
    #[inline(always)]
    pub const fn funct7(self) -> u8 {
        self.0.funct7()
    }
}
