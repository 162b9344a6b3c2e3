//! J-type decoder.
//!
//! ```text
//! +---------+-----------+---------+------------+----+--------+
//! | imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode |
//! |   31    |   30-21   |   20    |   19-12    |11-7|  6-0   |
//! +---------+-----------+---------+------------+----+--------+
//! ```
//!
//! Used by JAL. The offset has an implicit zero bit 0 and spans ±1 MiB.

use crate::isa::abi::RegisterAlias;
use crate::isa::instruction::{Field, InstructionWord, sign_extend};

/// `imm[20]` (bit 31), the sign bit.
const IMM_20: Field = Field::new(31, 1);
/// `imm[19:12]` (bits 19-12).
const IMM_19_12: Field = Field::new(12, 8);
/// `imm[11]` (bit 20).
const IMM_11: Field = Field::new(20, 1);
/// `imm[10:1]` (bits 30-21).
const IMM_10_1: Field = Field::new(21, 10);

/// Width of the reassembled immediate (21 bits including the implicit zero).
const IMM_BITS: u32 = 21;

instruction_format! {
    /// Unconditional jump instruction view.
    JType
}

impl JType {
    /// Link register (bits 11-7).
    #[inline(always)]
    pub const fn rd(self) -> RegisterAlias {
        self.0.rd()
    }

    /// Jump offset `imm[20|19:12|11|10:1] · 0`, sign-extended from bit 20.
    #[inline(always)]
    pub const fn imm(self) -> i32 {
        let w = self.0;
        let combined = (w.field(IMM_20) << 20)
            | (w.field(IMM_19_12) << 12)
            | (w.field(IMM_11) << 11)
            | (w.field(IMM_10_1) << 1);
        sign_extend(combined, IMM_BITS)
    }
}
