//! I-type decoder.
//!
//! ```text
//! +-----------+-----+--------+----+--------+
//! | imm[11:0] | rs1 | funct3 | rd | opcode |
//! |   31-20   |19-15| 14-12  |11-7|  6-0   |
//! +-----------+-----+--------+----+--------+
//! ```
//!
//! Used by immediate arithmetic, loads, JALR, FENCE, and SYSTEM. Shift-immediate
//! words reuse the upper immediate bits as `funct6 | shamt`, and SYSTEM words
//! reuse them as an unsigned CSR address.

use crate::isa::abi::RegisterAlias;
use crate::isa::instruction::{Field, InstructionWord, sign_extend};

/// Immediate field (bits 31-20).
const IMM: Field = Field::new(20, 12);

/// Width of the I-type immediate before sign extension.
const IMM_BITS: u32 = 12;

/// RV64 shift amount (bits 25-20).
const SHAMT: Field = Field::new(20, 6);

/// Shift-immediate selector above the 6-bit shift amount (bits 31-26).
const FUNCT6: Field = Field::new(26, 6);

instruction_format! {
    /// Register-immediate instruction view.
    IType
}

impl IType {
    /// Destination register (bits 11-7).
    #[inline(always)]
    pub const fn rd(self) -> RegisterAlias {
        self.0.rd()
    }

    /// Source register (bits 19-15).
    #[inline(always)]
    pub const fn rs1(self) -> RegisterAlias {
        self.0.rs1()
    }

    /// funct3 opcode extension (bits 14-12).
    #[inline(always)]
    pub const fn funct3(self) -> u8 {
        self.0.funct3()
    }

    /// Immediate `imm[11:0]`, sign-extended from bit 11.
    ///
    /// A raw field of `0x800` yields -2048.
    #[inline(always)]
    pub const fn imm(self) -> i32 {
        sign_extend(self.0.field(IMM), IMM_BITS)
    }

    /// Shift amount for RV64 shift-immediates (bits 25-20).
    #[inline(always)]
    pub const fn shamt(self) -> u32 {
        self.0.field(SHAMT)
    }

    /// Upper six bits (31-26) separating logical from arithmetic shifts.
    #[inline(always)]
    pub const fn funct6(self) -> u8 {
        self.0.field(FUNCT6) as u8
    }

    /// funct7 view of the upper bits (31-25), used by RV32 and `*W` shifts.
    #[inline(always)]
    pub const fn funct7(self) -> u8 {
        self.0.funct7()
    }

    /// Unsigned 12-bit CSR address (bits 31-20) for SYSTEM words.
    #[inline(always)]
    pub const fn csr(self) -> u16 {
        self.0.field(IMM) as u16
    }
}
