//! RISC-V Instruction Decoder.
//!
//! This module classifies 32-bit RISC-V instruction words and hands back a typed
//! view of their fields. It provides:
//! 1. **Classification:** Opcode-keyed selection of the R, I, S, B, U, J, or R4 format.
//! 2. **Legality:** funct3/funct7 checks against the RV64I, RV64M, RV64F/D, and SYSTEM tables.
//! 3. **Configuration:** Extension groups (RV64-only words, M, F/D) can be switched off.
//! 4. **Access:** The closed [`Instruction`] enum with format-independent accessors.
//!
//! Decoding is pure: the same word always produces the same result, and nothing
//! is cached between calls.

use tracing::{debug, trace};

use crate::common::error::DecodeError;
use crate::config::DecodeConfig;
use crate::isa::abi::RegisterAlias;
use crate::isa::format::{BType, Format, IType, JType, R4Type, RType, SType, UType};
use crate::isa::instruction::{Fields, InstructionWord};
use crate::isa::privileged::opcodes as sys_op;
use crate::isa::rv64f::{funct3 as f_f3, funct7 as f_f7, opcodes as f_op};
use crate::isa::rv64i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};
use crate::isa::rv64m::{funct3 as m_f3, opcodes as m_op};

/// Mask selecting the FP format from a `funct7` field (bits 26-25 of the word).
const FP_FMT_MASK: u8 = 0b11;

/// Shift selecting the FP operation (`funct5`) from a `funct7` field.
const FP_FUNCT5_SHIFT: u8 = 2;

/// Largest `rs2` selector of FCVT between integer and FP (`l`/`lu` variants).
const FCVT_INT_MAX: u32 = 0b11;

/// Largest `rs2` selector of FCVT on RV32 (`w`/`wu` variants).
const FCVT_INT_MAX_32: u32 = 0b01;

/// A classified instruction: one variant per encoding format.
///
/// Each variant wraps the matching format decoder, which holds a copy of the
/// word. Use the variant's decoder for format-specific fields, or the methods
/// here for the fields every caller asks about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Register-register arithmetic and OP-FP.
    R(RType),
    /// Immediate arithmetic, loads, JALR, FENCE, SYSTEM, and FP loads.
    I(IType),
    /// Integer and FP stores.
    S(SType),
    /// Conditional branches.
    B(BType),
    /// LUI and AUIPC.
    U(UType),
    /// JAL.
    J(JType),
    /// Fused multiply-add family.
    R4(R4Type),
}

impl Instruction {
    /// Wraps `word` in the decoder for `format` without any legality check.
    pub const fn with_format(format: Format, word: InstructionWord) -> Self {
        match format {
            Format::R => Self::R(RType::new(word)),
            Format::I => Self::I(IType::new(word)),
            Format::S => Self::S(SType::new(word)),
            Format::B => Self::B(BType::new(word)),
            Format::U => Self::U(UType::new(word)),
            Format::J => Self::J(JType::new(word)),
            Format::R4 => Self::R4(R4Type::new(word)),
        }
    }

    /// Returns the encoding format.
    pub const fn format(self) -> Format {
        match self {
            Self::R(_) => Format::R,
            Self::I(_) => Format::I,
            Self::S(_) => Format::S,
            Self::B(_) => Format::B,
            Self::U(_) => Format::U,
            Self::J(_) => Format::J,
            Self::R4(_) => Format::R4,
        }
    }

    /// Returns the underlying instruction word.
    pub const fn word(self) -> InstructionWord {
        match self {
            Self::R(d) => d.word(),
            Self::I(d) => d.word(),
            Self::S(d) => d.word(),
            Self::B(d) => d.word(),
            Self::U(d) => d.word(),
            Self::J(d) => d.word(),
            Self::R4(d) => d.word(),
        }
    }

    /// Returns the opcode field (bits 6-0).
    pub const fn opcode(self) -> u8 {
        self.word().opcode()
    }

    /// Returns the destination register field, if the format has one.
    ///
    /// The field is named as an integer register even for OP-FP words, where
    /// it may select an FP register; see [`Fields`]. R4 words name an FP
    /// destination instead; see [`R4Type::fd`].
    pub const fn rd(self) -> Option<RegisterAlias> {
        match self {
            Self::R(d) => Some(d.rd()),
            Self::I(d) => Some(d.rd()),
            Self::U(d) => Some(d.rd()),
            Self::J(d) => Some(d.rd()),
            Self::S(_) | Self::B(_) | Self::R4(_) => None,
        }
    }

    /// Returns the first source register, if the format has one.
    pub const fn rs1(self) -> Option<RegisterAlias> {
        match self {
            Self::R(d) => Some(d.rs1()),
            Self::I(d) => Some(d.rs1()),
            Self::S(d) => Some(d.rs1()),
            Self::B(d) => Some(d.rs1()),
            Self::U(_) | Self::J(_) | Self::R4(_) => None,
        }
    }

    /// Returns the second source register, if the format has one.
    pub const fn rs2(self) -> Option<RegisterAlias> {
        match self {
            Self::R(d) => Some(d.rs2()),
            Self::S(d) => Some(d.rs2()),
            Self::B(d) => Some(d.rs2()),
            Self::I(_) | Self::U(_) | Self::J(_) | Self::R4(_) => None,
        }
    }

    /// Returns the funct3 field, if the format has one.
    pub const fn funct3(self) -> Option<u8> {
        match self {
            Self::R(d) => Some(d.funct3()),
            Self::I(d) => Some(d.funct3()),
            Self::S(d) => Some(d.funct3()),
            Self::B(d) => Some(d.funct3()),
            Self::R4(d) => Some(d.funct3()),
            Self::U(_) | Self::J(_) => None,
        }
    }

    /// Returns the sign-extended immediate widened to 64 bits.
    ///
    /// `None` for R and R4 words, which carry no immediate.
    pub const fn imm(self) -> Option<i64> {
        match self {
            Self::I(d) => Some(d.imm() as i64),
            Self::S(d) => Some(d.imm() as i64),
            Self::B(d) => Some(d.imm() as i64),
            Self::U(d) => Some(d.imm() as i64),
            Self::J(d) => Some(d.imm() as i64),
            Self::R(_) | Self::R4(_) => None,
        }
    }

    /// Collects every field this instruction's format defines.
    pub const fn fields(self) -> Fields {
        let word = self.word();
        let (fd, fs, funct7, funct2) = match self {
            Self::R4(d) => (
                Some(d.fd()),
                Some([d.fs1(), d.fs2(), d.fs3()]),
                None,
                Some(d.funct2()),
            ),
            Self::R(d) => (None, None, Some(d.funct7()), None),
            _ => (None, None, None, None),
        };
        Fields {
            raw: word.raw(),
            format: self.format(),
            opcode: word.opcode(),
            rd: self.rd(),
            rs1: self.rs1(),
            rs2: self.rs2(),
            fd,
            fs,
            funct3: self.funct3(),
            funct7,
            funct2,
            imm: self.imm(),
        }
    }
}

/// Returns the format an opcode is encoded in, ignoring extension settings.
///
/// # Arguments
///
/// * `opcode` - The 7-bit opcode field.
///
/// # Returns
///
/// `None` for opcodes outside RV64I, RV64M, RV64F/D, and SYSTEM.
pub const fn format_of(opcode: u8) -> Option<Format> {
    match opcode {
        i_op::OP_LOAD
        | i_op::OP_IMM
        | i_op::OP_IMM_32
        | i_op::OP_JALR
        | i_op::OP_MISC_MEM
        | sys_op::OP_SYSTEM
        | f_op::OP_LOAD_FP => Some(Format::I),

        i_op::OP_STORE | f_op::OP_STORE_FP => Some(Format::S),
        i_op::OP_REG | i_op::OP_REG_32 | f_op::OP_FP => Some(Format::R),
        i_op::OP_BRANCH => Some(Format::B),
        i_op::OP_LUI | i_op::OP_AUIPC => Some(Format::U),
        i_op::OP_JAL => Some(Format::J),

        f_op::OP_FMADD | f_op::OP_FMSUB | f_op::OP_FNMSUB | f_op::OP_FNMADD => Some(Format::R4),

        _ => None,
    }
}

/// Decodes a word with every extension group enabled.
///
/// Shorthand for `Decoder::default().decode(word)`.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode(word: impl Into<InstructionWord>) -> Result<Instruction, DecodeError> {
    Decoder::default().decode(word)
}

/// Configured instruction classifier.
///
/// Holds only the enabled extension groups; it is `Copy` and can be shared
/// freely between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoder {
    rv64: bool,
    mul_div: bool,
    float: bool,
}

impl Decoder {
    /// Creates a decoder accepting the groups enabled in `config`.
    pub const fn new(config: &DecodeConfig) -> Self {
        Self {
            rv64: config.rv64,
            mul_div: config.mul_div,
            float: config.float,
        }
    }

    /// Classifies a 32-bit word.
    ///
    /// # Arguments
    ///
    /// * `word` - The raw encoding, as `u32` or [`InstructionWord`].
    ///
    /// # Returns
    ///
    /// The [`Instruction`] variant matching the word's format.
    ///
    /// # Errors
    ///
    /// * [`DecodeError::Compressed`] if the low two bits are not `0b11`.
    /// * [`DecodeError::UnsupportedOpcode`] if no enabled group uses the opcode.
    /// * [`DecodeError::UnsupportedInstruction`] if the funct3/funct7 combination
    ///   is not defined for the opcode.
    pub fn decode(&self, word: impl Into<InstructionWord>) -> Result<Instruction, DecodeError> {
        let word = word.into();
        let result = self.classify(word);
        match &result {
            Ok(inst) => trace!(word = %word, format = %inst.format(), "decoded instruction"),
            Err(err) => debug!(word = %word, error = %err, "rejected instruction"),
        }
        result
    }

    /// Performs classification without logging.
    fn classify(&self, word: InstructionWord) -> Result<Instruction, DecodeError> {
        if word.is_compressed() {
            return Err(DecodeError::Compressed(word.raw() as u16));
        }

        let opcode = word.opcode();
        let format = self
            .enabled_format(opcode)
            .ok_or(DecodeError::UnsupportedOpcode {
                word: word.raw(),
                opcode,
            })?;

        if !self.is_legal(word) {
            return Err(DecodeError::UnsupportedInstruction {
                word: word.raw(),
                opcode,
                funct3: word.funct3(),
                funct7: word.funct7(),
            });
        }

        Ok(Instruction::with_format(format, word))
    }

    /// Returns the format of `opcode` if its extension group is enabled.
    const fn enabled_format(&self, opcode: u8) -> Option<Format> {
        match opcode {
            i_op::OP_IMM_32 | i_op::OP_REG_32 if !self.rv64 => None,
            f_op::OP_LOAD_FP
            | f_op::OP_STORE_FP
            | f_op::OP_FP
            | f_op::OP_FMADD
            | f_op::OP_FMSUB
            | f_op::OP_FNMSUB
            | f_op::OP_FNMADD
                if !self.float =>
            {
                None
            }
            _ => format_of(opcode),
        }
    }

    /// Checks the funct3/funct7 combination for a supported opcode.
    fn is_legal(&self, word: InstructionWord) -> bool {
        let f3 = word.funct3();
        let f7 = word.funct7();

        match word.opcode() {
            i_op::OP_LOAD => match f3 {
                i_f3::LB | i_f3::LH | i_f3::LW | i_f3::LBU | i_f3::LHU => true,
                i_f3::LD | i_f3::LWU => self.rv64,
                _ => false,
            },
            i_op::OP_STORE => match f3 {
                i_f3::SB | i_f3::SH | i_f3::SW => true,
                i_f3::SD => self.rv64,
                _ => false,
            },
            i_op::OP_IMM => self.op_imm_legal(IType::new(word)),
            i_op::OP_IMM_32 => match f3 {
                i_f3::ADD_SUB => true,
                i_f3::SLL => f7 == i_f7::DEFAULT,
                i_f3::SRL_SRA => f7 == i_f7::DEFAULT || f7 == i_f7::SRA,
                _ => false,
            },
            i_op::OP_REG => match f7 {
                i_f7::DEFAULT => true,
                i_f7::SUB => f3 == i_f3::ADD_SUB || f3 == i_f3::SRL_SRA,
                m_op::M_EXTENSION => self.mul_div,
                _ => false,
            },
            i_op::OP_REG_32 => match f7 {
                i_f7::DEFAULT => matches!(f3, i_f3::ADD_SUB | i_f3::SLL | i_f3::SRL_SRA),
                i_f7::SUB => f3 == i_f3::ADD_SUB || f3 == i_f3::SRL_SRA,
                m_op::M_EXTENSION => {
                    self.mul_div
                        && matches!(f3, m_f3::MUL | m_f3::DIV | m_f3::DIVU | m_f3::REM | m_f3::REMU)
                }
                _ => false,
            },
            i_op::OP_BRANCH => matches!(
                f3,
                i_f3::BEQ | i_f3::BNE | i_f3::BLT | i_f3::BGE | i_f3::BLTU | i_f3::BGEU
            ),
            i_op::OP_JALR => f3 == i_f3::JALR,
            i_op::OP_MISC_MEM => f3 == i_f3::FENCE || f3 == i_f3::FENCE_I,
            i_op::OP_LUI | i_op::OP_AUIPC | i_op::OP_JAL => true,
            sys_op::OP_SYSTEM => system_legal(word),
            f_op::OP_LOAD_FP | f_op::OP_STORE_FP => f3 == f_f3::WIDTH_W || f3 == f_f3::WIDTH_D,
            f_op::OP_FP => self.op_fp_legal(RType::new(word)),
            f_op::OP_FMADD | f_op::OP_FMSUB | f_op::OP_FNMSUB | f_op::OP_FNMADD => {
                let r4 = R4Type::new(word);
                fmt_legal(r4.funct2()) && rounding_legal(r4.funct3())
            }
            _ => false,
        }
    }

    /// Shift-immediates carry a selector above the shift amount; other OP-IMM
    /// words use every funct3.
    const fn op_imm_legal(&self, inst: IType) -> bool {
        match inst.funct3() {
            i_f3::SLL => {
                if self.rv64 {
                    inst.funct6() == i_f7::SHIFT_LOGICAL_6
                } else {
                    inst.funct7() == i_f7::DEFAULT
                }
            }
            i_f3::SRL_SRA => {
                if self.rv64 {
                    matches!(inst.funct6(), i_f7::SHIFT_LOGICAL_6 | i_f7::SHIFT_ARITH_6)
                } else {
                    matches!(inst.funct7(), i_f7::DEFAULT | i_f7::SRA)
                }
            }
            _ => true,
        }
    }

    /// OP-FP splits funct7 into a 5-bit operation and a 2-bit format.
    fn op_fp_legal(&self, inst: RType) -> bool {
        let fmt = inst.funct7() & FP_FMT_MASK;
        let funct5 = inst.funct7() >> FP_FUNCT5_SHIFT;
        let f3 = inst.funct3();
        let rs2 = inst.rs2().index() as u32;

        if !fmt_legal(fmt) {
            return false;
        }

        match funct5 {
            f_f7::FADD | f_f7::FSUB | f_f7::FMUL | f_f7::FDIV => rounding_legal(f3),
            f_f7::FSQRT => rs2 == 0 && rounding_legal(f3),
            f_f7::FSGNJ => matches!(f3, f_f3::FSGNJ | f_f3::FSGNJN | f_f3::FSGNJX),
            f_f7::FMIN_MAX => f3 == f_f3::FMIN || f3 == f_f3::FMAX,
            f_f7::FCMP => matches!(f3, f_f3::FEQ | f_f3::FLT | f_f3::FLE),
            // fcvt.s.d / fcvt.d.s: rs2 names the source format, which must differ.
            f_f7::FCVT_FMT => fmt_legal(rs2 as u8) && rs2 as u8 != fmt && rounding_legal(f3),
            f_f7::FCVT_INT_F | f_f7::FCVT_F_INT => {
                let max = if self.rv64 { FCVT_INT_MAX } else { FCVT_INT_MAX_32 };
                rs2 <= max && rounding_legal(f3)
            }
            f_f7::FMV_X_FCLASS => rs2 == 0 && (f3 == f_f3::FMV_X || f3 == f_f3::FCLASS),
            f_f7::FMV_F_X => rs2 == 0 && f3 == f_f3::FMV_X,
            _ => false,
        }
    }
}

impl Default for Decoder {
    /// Accepts every supported extension group.
    fn default() -> Self {
        Self::new(&DecodeConfig::default())
    }
}

/// SYSTEM words: the fixed privileged encodings, SFENCE.VMA, and the six CSR forms.
const fn system_legal(word: InstructionWord) -> bool {
    match word.funct3() {
        sys_op::PRIV => match word.raw() {
            sys_op::ECALL | sys_op::EBREAK | sys_op::MRET | sys_op::SRET | sys_op::WFI => true,
            _ => {
                word.funct7() == sys_op::SFENCE_VMA_FUNCT7
                    && matches!(word.rd(), RegisterAlias::Zero)
            }
        },
        sys_op::CSRRW
        | sys_op::CSRRS
        | sys_op::CSRRC
        | sys_op::CSRRWI
        | sys_op::CSRRSI
        | sys_op::CSRRCI => true,
        _ => false,
    }
}

/// Only single and double precision are supported.
const fn fmt_legal(fmt: u8) -> bool {
    fmt == f_f7::FMT_S || fmt == f_f7::FMT_D
}

/// Rounding modes `0b101` and `0b110` are reserved.
fn rounding_legal(rm: u8) -> bool {
    !f_f3::RM_RESERVED.contains(&rm)
}
