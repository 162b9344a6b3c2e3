//! Per-format instruction decoders.
//!
//! RISC-V defines six base encodings (R, I, S, B, U, J) plus the R4 encoding
//! used by fused floating-point operations. Each decoder here wraps a copy of an
//! [`InstructionWord`](crate::isa::instruction::InstructionWord) and exposes only the fields its format defines, with
//! immediates reassembled and sign-extended.
//!
//! Any word can be viewed through any decoder: extraction never fails. Choosing
//! the right decoder for an opcode is the job of [`decode`](crate::isa::decode).

use std::fmt;

use serde::Serialize;

/// RISC-V instruction encoding formats.
///
/// See section `2.3 Immediate Encoding Variants` of the unprivileged ISA manual.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    /// Register-register: `funct7 | rs2 | rs1 | funct3 | rd | opcode`.
    R,
    /// Register-immediate: `imm[11:0] | rs1 | funct3 | rd | opcode`.
    I,
    /// Store: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
    S,
    /// Branch: `imm[12|10:5] | rs2 | rs1 | funct3 | imm[4:1|11] | opcode`.
    B,
    /// Upper immediate: `imm[31:12] | rd | opcode`.
    U,
    /// Jump: `imm[20|10:1|11|19:12] | rd | opcode`.
    J,
    /// Fused FP: `rs3 | funct2 | rs2 | rs1 | funct3 | rd | opcode`.
    R4,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::R => "R",
            Self::I => "I",
            Self::S => "S",
            Self::B => "B",
            Self::U => "U",
            Self::J => "J",
            Self::R4 => "R4",
        };
        f.write_str(name)
    }
}

/// Declares a format decoder wrapping an `InstructionWord` by value.
///
/// The invoking module must have `InstructionWord` in scope.
///
/// Generates the struct plus the accessors every format shares: construction,
/// the underlying word, and the opcode.
macro_rules! instruction_format {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name(InstructionWord);

        impl $name {
            /// Views `word` through this format.
            pub const fn new(word: InstructionWord) -> Self {
                Self(word)
            }

            /// Returns the wrapped instruction word.
            #[inline(always)]
            pub const fn word(self) -> InstructionWord {
                self.0
            }

            /// Returns the opcode field (bits 6-0).
            #[inline(always)]
            pub const fn opcode(self) -> u8 {
                self.0.opcode()
            }
        }

        impl From<InstructionWord> for $name {
            fn from(word: InstructionWord) -> Self {
                Self(word)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(InstructionWord::new(raw))
            }
        }
    };
}

/// B-type (conditional branch) decoder.
pub mod b;
/// I-type (register-immediate, load, jalr, system) decoder.
pub mod i;
/// J-type (jal) decoder.
pub mod j;
/// R-type (register-register) decoder.
pub mod r;
/// R4-type (fused floating-point) decoder.
pub mod r4;
/// S-type (store) decoder.
pub mod s;
/// U-type (lui/auipc) decoder.
pub mod u;

pub use b::BType;
pub use i::IType;
pub use j::JType;
pub use r::RType;
pub use r4::R4Type;
pub use s::SType;
pub use u::UType;
