//! S-type decoder.
//!
//! ```text
//! +-----------+-----+-----+--------+----------+--------+
//! | imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode |
//! |   31-25   |24-20|19-15| 14-12  |   11-7   |  6-0   |
//! +-----------+-----+-----+--------+----------+--------+
//! ```
//!
//! Used by stores. Stores write no register, so there is no `rd`.

use crate::isa::abi::RegisterAlias;
use crate::isa::instruction::{Field, InstructionWord, sign_extend};

/// Immediate low part `imm[4:0]` (bits 11-7).
const IMM_4_0: Field = Field::new(7, 5);

/// Immediate high part `imm[11:5]` (bits 31-25).
const IMM_11_5: Field = Field::new(25, 7);

/// Position of `imm[11:5]` in the reassembled immediate.
const IMM_11_5_POS: u32 = 5;

/// Width of the S-type immediate before sign extension.
const IMM_BITS: u32 = 12;

instruction_format! {
    /// Store instruction view.
    SType
}

impl SType {
    /// Base address register (bits 19-15).
    #[inline(always)]
    pub const fn rs1(self) -> RegisterAlias {
        self.0.rs1()
    }

    /// Source data register (bits 24-20).
    #[inline(always)]
    pub const fn rs2(self) -> RegisterAlias {
        self.0.rs2()
    }

    /// funct3 opcode extension (bits 14-12), the store width.
    #[inline(always)]
    pub const fn funct3(self) -> u8 {
        self.0.funct3()
    }

    /// Immediate `imm[11:5] · imm[4:0]`, sign-extended from bit 11.
    #[inline(always)]
    pub const fn imm(self) -> i32 {
        let combined = (self.0.field(IMM_11_5) << IMM_11_5_POS) | self.0.field(IMM_4_0);
        sign_extend(combined, IMM_BITS)
    }
}
