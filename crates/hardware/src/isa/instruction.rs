//! Instruction words and bit-field extraction.
//!
//! Provides the [`InstructionWord`] value type, the [`Field`] descriptor used by
//! every format decoder to pull bit ranges out of a word, and the shared
//! [`sign_extend`] helper. Extraction is pure masking and shifting and never
//! validates the opcode/funct combination.

use std::fmt;

use serde::Serialize;

use crate::common::constants::{COMPRESSED_INSTRUCTION_MASK, UNCOMPRESSED_INSTRUCTION_VALUE};
use crate::isa::abi::{FpRegister, RegisterAlias};
use crate::isa::format::Format;

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// A contiguous bit range within an instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    /// Position of the least-significant bit.
    pub offset: u32,
    /// Number of bits.
    pub width: u32,
}

impl Field {
    /// Describes the bits `[offset + width - 1 : offset]`.
    pub const fn new(offset: u32, width: u32) -> Self {
        Self { offset, width }
    }

    /// Returns the right-aligned mask for this field's width.
    #[inline(always)]
    pub const fn mask(self) -> u32 {
        if self.width >= INSTRUCTION_WIDTH {
            u32::MAX
        } else {
            (1 << self.width) - 1
        }
    }

    /// Extracts the field from `word`, right-aligned and zero-extended.
    ///
    /// Bits above bit 31 read as zero, so a field starting at or past bit 32
    /// extracts as 0.
    #[inline(always)]
    pub const fn extract(self, word: u32) -> u32 {
        if self.offset >= INSTRUCTION_WIDTH {
            0
        } else {
            (word >> self.offset) & self.mask()
        }
    }
}

/// Opcode field (bits 6-0).
pub const OPCODE: Field = Field::new(0, 7);
/// Destination register field (bits 11-7).
pub const RD: Field = Field::new(7, 5);
/// funct3 field (bits 14-12).
pub const FUNCT3: Field = Field::new(12, 3);
/// First source register field (bits 19-15).
pub const RS1: Field = Field::new(15, 5);
/// Second source register field (bits 24-20).
pub const RS2: Field = Field::new(20, 5);
/// funct7 field (bits 31-25).
pub const FUNCT7: Field = Field::new(25, 7);
/// Third source register field of R4 words (bits 31-27).
pub const RS3: Field = Field::new(27, 5);
/// Floating-point format selector of R4 words (bits 26-25).
pub const FUNCT2: Field = Field::new(25, 2);

/// Sign extends the low `bits` of `value` to a 32-bit signed integer.
///
/// Bit `bits - 1` is the sign bit and is replicated into every higher bit.
///
/// # Arguments
///
/// * `value` - The value to extend; bits at or above `bits` are ignored.
/// * `bits` - The number of valid bits in `value`. A width of 0 yields 0, and
///   widths of 32 or more reinterpret `value` unchanged.
#[inline(always)]
pub const fn sign_extend(value: u32, bits: u32) -> i32 {
    if bits == 0 {
        return 0;
    }
    if bits >= INSTRUCTION_WIDTH {
        return value as i32;
    }
    let shift = INSTRUCTION_WIDTH - bits;
    ((value << shift) as i32) >> shift
}

/// A raw 32-bit instruction encoding.
///
/// The word is immutable; format decoders receive it by value and only read it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InstructionWord(u32);

impl InstructionWord {
    /// Wraps a raw encoding.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Assembles a word from its little-endian memory image.
    pub const fn from_le_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }

    /// Returns the raw encoding.
    #[inline(always)]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Extracts an arbitrary field.
    #[inline(always)]
    pub const fn field(self, field: Field) -> u32 {
        field.extract(self.0)
    }

    /// Extracts the opcode field (bits 6-0).
    ///
    /// The opcode determines the instruction format and operation category.
    #[inline(always)]
    pub const fn opcode(self) -> u8 {
        OPCODE.extract(self.0) as u8
    }

    /// Extracts the destination register field (bits 11-7).
    #[inline(always)]
    pub const fn rd(self) -> RegisterAlias {
        RegisterAlias::from_field(RD.extract(self.0))
    }

    /// Extracts the first source register field (bits 19-15).
    #[inline(always)]
    pub const fn rs1(self) -> RegisterAlias {
        RegisterAlias::from_field(RS1.extract(self.0))
    }

    /// Extracts the second source register field (bits 24-20).
    #[inline(always)]
    pub const fn rs2(self) -> RegisterAlias {
        RegisterAlias::from_field(RS2.extract(self.0))
    }

    /// Extracts the funct3 field (bits 14-12).
    ///
    /// Used to distinguish between different operations within the same opcode
    /// (e.g., BEQ vs BNE).
    #[inline(always)]
    pub const fn funct3(self) -> u8 {
        FUNCT3.extract(self.0) as u8
    }

    /// Extracts the funct7 field (bits 31-25).
    ///
    /// Used to distinguish between standard and alternate encodings
    /// (e.g., ADD vs SUB) and to select the M extension.
    #[inline(always)]
    pub const fn funct7(self) -> u8 {
        FUNCT7.extract(self.0) as u8
    }

    /// Returns `true` if the low two bits mark a 16-bit compressed encoding.
    #[inline(always)]
    pub const fn is_compressed(self) -> bool {
        self.0 & COMPRESSED_INSTRUCTION_MASK != UNCOMPRESSED_INSTRUCTION_VALUE
    }
}

impl From<u32> for InstructionWord {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<InstructionWord> for u32 {
    fn from(word: InstructionWord) -> Self {
        word.0
    }
}

impl fmt::Display for InstructionWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl fmt::LowerHex for InstructionWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Flat summary of a decoded instruction.
///
/// Contains every field the instruction's format defines; fields the format
/// lacks are `None`. Serialises to JSON for tooling.
///
/// `rd`, `rs1` and `rs2` are the raw 5-bit register fields under their integer
/// ABI names. In OP-FP words whether each one names an FP or an integer
/// register depends on the operation (`fcvt.w.s` writes `x`, `fadd.s` writes
/// `f`), so they are reported as-is: `fadd.s ft0, ft0, ft0` lists `rd` as
/// `zero`. Only R4 words, whose operands are always FP, fill `fd` and `fs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Fields {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Encoding format.
    pub format: Format,
    /// Extracted opcode field.
    pub opcode: u8,
    /// Destination register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rd: Option<RegisterAlias>,
    /// First source register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rs1: Option<RegisterAlias>,
    /// Second source register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rs2: Option<RegisterAlias>,
    /// Floating-point destination register (R4 only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fd: Option<FpRegister>,
    /// Floating-point source registers (R4 only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs: Option<[FpRegister; 3]>,
    /// Function code field 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funct3: Option<u8>,
    /// Function code field 7.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funct7: Option<u8>,
    /// Function code field 2 (R4 only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funct2: Option<u8>,
    /// Sign-extended immediate value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imm: Option<i64>,
}
