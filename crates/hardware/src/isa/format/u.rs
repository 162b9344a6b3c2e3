//! U-type decoder.
//!
//! ```text
//! +------------+----+--------+
//! | imm[31:12] | rd | opcode |
//! |   31-12    |11-7|  6-0   |
//! +------------+----+--------+
//! ```
//!
//! Used by LUI and AUIPC. The encoded bits already sit in their final
//! position, so the immediate is the word with its low 12 bits cleared.

use crate::isa::abi::RegisterAlias;
use crate::isa::instruction::{Field, InstructionWord};

/// Mask keeping the upper 20 bits of the word.
const IMM_MASK: u32 = 0xFFFF_F000;

/// Upper immediate field (bits 31-12), right-aligned.
const IMM_31_12: Field = Field::new(12, 20);

instruction_format! {
    /// Upper-immediate instruction view.
    UType
}

impl UType {
    /// Destination register (bits 11-7).
    #[inline(always)]
    pub const fn rd(self) -> RegisterAlias {
        self.0.rd()
    }

    /// Immediate `imm[31:12] · 0x000` as a signed 32-bit value.
    ///
    /// Bit 31 of the word is the sign of the result; the low 12 bits are zero.
    #[inline(always)]
    pub const fn imm(self) -> i32 {
        (self.0.raw() & IMM_MASK) as i32
    }

    /// The 20 encoded bits, right-aligned (the assembler operand of `lui`).
    #[inline(always)]
    pub const fn imm20(self) -> u32 {
        self.0.field(IMM_31_12)
    }
}
