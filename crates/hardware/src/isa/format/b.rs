//! B-type decoder.
//!
//! ```text
//! +---------+-----------+-----+-----+--------+----------+---------+--------+
//! | imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode |
//! |   31    |   30-25   |24-20|19-15| 14-12  |   11-8   |    7    |  6-0   |
//! +---------+-----------+-----+-----+--------+----------+---------+--------+
//! ```
//!
//! Used by conditional branches. The immediate is a byte offset whose bit 0 is
//! never encoded, so every target is 2-byte aligned.

use crate::isa::abi::RegisterAlias;
use crate::isa::instruction::{Field, InstructionWord, sign_extend};

/// `imm[12]` (bit 31), the sign bit.
const IMM_12: Field = Field::new(31, 1);
/// `imm[11]` (bit 7).
const IMM_11: Field = Field::new(7, 1);
/// `imm[10:5]` (bits 30-25).
const IMM_10_5: Field = Field::new(25, 6);
/// `imm[4:1]` (bits 11-8).
const IMM_4_1: Field = Field::new(8, 4);

/// Width of the reassembled immediate (13 bits including the implicit zero).
const IMM_BITS: u32 = 13;

instruction_format! {
    /// Conditional branch instruction view.
    BType
}

impl BType {
    /// First comparison register (bits 19-15).
    #[inline(always)]
    pub const fn rs1(self) -> RegisterAlias {
        self.0.rs1()
    }

    /// Second comparison register (bits 24-20).
    #[inline(always)]
    pub const fn rs2(self) -> RegisterAlias {
        self.0.rs2()
    }

    /// funct3 opcode extension (bits 14-12), the comparison.
    #[inline(always)]
    pub const fn funct3(self) -> u8 {
        self.0.funct3()
    }

    /// Branch offset `imm[12|11|10:5|4:1] · 0`, sign-extended from bit 12.
    ///
    /// Always even; the range is -4096..=4094.
    #[inline(always)]
    pub const fn imm(self) -> i32 {
        let w = self.0;
        let combined = (w.field(IMM_12) << 12)
            | (w.field(IMM_11) << 11)
            | (w.field(IMM_10_5) << 5)
            | (w.field(IMM_4_1) << 1);
        sign_extend(combined, IMM_BITS)
    }
}
