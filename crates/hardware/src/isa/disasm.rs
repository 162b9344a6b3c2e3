//! Instruction Disassembler for RISC-V RV64IMFD.
//!
//! Converts a 32-bit instruction encoding into assembler syntax for debug
//! tracing, the CLI, and test diagnostics. Register operands are printed with
//! their ABI names.
//!
//! # Supported Extensions
//!
//! - RV64I (base integer)
//! - RV64M (multiply/divide)
//! - RV64F / RV64D (loads, stores, OP-FP, fused multiply-add)
//! - SYSTEM (ECALL, EBREAK, xRET, WFI, SFENCE.VMA, CSR access) and FENCE
//!
//! # Usage
//!
//! ```
//! use rvdec_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A00513_u32);
//! assert_eq!(text, "addi a0, zero, 10");
//! ```

use std::fmt;

use crate::isa::abi::{FpRegister, RegisterAlias};
use crate::isa::decode::{Decoder, Instruction};
use crate::isa::format::{BType, IType, R4Type, RType, SType};
use crate::isa::instruction::InstructionWord;
use crate::isa::privileged::opcodes as sys_op;
use crate::isa::rv64f::{funct3 as f_f3, funct7 as f_f7, opcodes as f_op};
use crate::isa::rv64i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};
use crate::isa::rv64m::{funct3 as m_f3, opcodes as m_op};

/// Reinterprets an integer register field as an FP register.
#[inline]
const fn freg(reg: RegisterAlias) -> FpRegister {
    FpRegister::from_field(reg as u32)
}

/// Disassembles a 32-bit RISC-V instruction into a human-readable string.
///
/// Returns a line like `"add a0, a1, a2"`, or `".word 0x........"` for
/// encodings the decoder rejects.
///
/// # Arguments
///
/// * `word` - The raw 32-bit instruction encoding.
pub fn disassemble(word: impl Into<InstructionWord>) -> String {
    disassemble_with(&Decoder::default(), word)
}

/// Disassembles a word with a configured decoder.
///
/// Words in a disabled extension group fall back to `.word` just like
/// undefined encodings.
pub fn disassemble_with(decoder: &Decoder, word: impl Into<InstructionWord>) -> String {
    let word = word.into();
    decoder
        .decode(word)
        .map_or_else(|_| raw_word(word), |inst| render(&inst))
}

/// Renders an already-classified instruction.
pub fn render(inst: &Instruction) -> String {
    match *inst {
        Instruction::R(r) => render_r(r),
        Instruction::I(i) => render_i(i),
        Instruction::S(s) => render_s(s),
        Instruction::B(b) => render_b(b),
        Instruction::U(u) => {
            let mn = if u.opcode() == i_op::OP_LUI { "lui" } else { "auipc" };
            format!("{mn} {}, {:#x}", u.rd(), u.imm20())
        }
        Instruction::J(j) => format!("jal {}, {}", j.rd(), j.imm()),
        Instruction::R4(r4) => render_r4(r4),
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

/// Directive used for words with no mnemonic.
fn raw_word(word: InstructionWord) -> String {
    format!(".word {word}")
}

/// R-type: OP, OP-32, OP-FP.
fn render_r(r: RType) -> String {
    match r.opcode() {
        i_op::OP_REG => disasm_op_reg(r, ""),
        i_op::OP_REG_32 => disasm_op_reg(r, "w"),
        f_op::OP_FP => disasm_op_fp(r),
        _ => raw_word(r.word()),
    }
}

/// Disassemble OP_REG / OP_REG_32 (register-register).
fn disasm_op_reg(r: RType, suffix: &str) -> String {
    let (f3, f7) = (r.funct3(), r.funct7());

    let mn = if f7 == m_op::M_EXTENSION {
        match f3 {
            m_f3::MUL => "mul",
            m_f3::MULH => "mulh",
            m_f3::MULHSU => "mulhsu",
            m_f3::MULHU => "mulhu",
            m_f3::DIV => "div",
            m_f3::DIVU => "divu",
            m_f3::REM => "rem",
            _ => "remu",
        }
    } else {
        match (f3, f7) {
            (i_f3::ADD_SUB, i_f7::SUB) => "sub",
            (i_f3::ADD_SUB, _) => "add",
            (i_f3::SLL, _) => "sll",
            (i_f3::SLT, _) => "slt",
            (i_f3::SLTU, _) => "sltu",
            (i_f3::XOR, _) => "xor",
            (i_f3::SRL_SRA, i_f7::SRA) => "sra",
            (i_f3::SRL_SRA, _) => "srl",
            (i_f3::OR, _) => "or",
            _ => "and",
        }
    };
    format!("{mn}{suffix} {}, {}, {}", r.rd(), r.rs1(), r.rs2())
}

/// Disassemble OP_FP (floating-point arithmetic).
fn disasm_op_fp(r: RType) -> String {
    let f7 = r.funct7();
    let p = precision(f7 & 0b11);
    let (f3, rd, rs1, rs2) = (r.funct3(), r.rd(), r.rs1(), r.rs2());
    let (fd, fs1, fs2) = (freg(rd), freg(rs1), freg(rs2));

    match f7 >> 2 {
        f_f7::FADD => format!("fadd.{p} {fd}, {fs1}, {fs2}"),
        f_f7::FSUB => format!("fsub.{p} {fd}, {fs1}, {fs2}"),
        f_f7::FMUL => format!("fmul.{p} {fd}, {fs1}, {fs2}"),
        f_f7::FDIV => format!("fdiv.{p} {fd}, {fs1}, {fs2}"),
        f_f7::FSQRT => format!("fsqrt.{p} {fd}, {fs1}"),
        f_f7::FSGNJ => {
            let mn = match f3 {
                f_f3::FSGNJ => "fsgnj",
                f_f3::FSGNJN => "fsgnjn",
                _ => "fsgnjx",
            };
            format!("{mn}.{p} {fd}, {fs1}, {fs2}")
        }
        f_f7::FMIN_MAX => {
            let mn = if f3 == f_f3::FMIN { "fmin" } else { "fmax" };
            format!("{mn}.{p} {fd}, {fs1}, {fs2}")
        }
        f_f7::FCMP => {
            let mn = match f3 {
                f_f3::FEQ => "feq",
                f_f3::FLT => "flt",
                _ => "fle",
            };
            format!("{mn}.{p} {rd}, {fs1}, {fs2}")
        }
        f_f7::FCVT_FMT => format!("fcvt.{p}.{} {fd}, {fs1}", precision(rs2 as u8)),
        f_f7::FCVT_INT_F => format!("fcvt.{}.{p} {rd}, {fs1}", int_variant(rs2)),
        f_f7::FCVT_F_INT => format!("fcvt.{p}.{} {fd}, {rs1}", int_variant(rs2)),
        f_f7::FMV_X_FCLASS => {
            if f3 == f_f3::FCLASS {
                format!("fclass.{p} {rd}, {fs1}")
            } else {
                format!("fmv.x.{} {rd}, {fs1}", move_suffix(p))
            }
        }
        f_f7::FMV_F_X => format!("fmv.{}.x {fd}, {rs1}", move_suffix(p)),
        _ => raw_word(r.word()),
    }
}

/// I-type: loads, OP-IMM, OP-IMM-32, JALR, FENCE, SYSTEM, FP loads.
fn render_i(i: IType) -> String {
    let (rd, rs1, f3, imm) = (i.rd(), i.rs1(), i.funct3(), i.imm());
    match i.opcode() {
        i_op::OP_LOAD => {
            let mn = match f3 {
                i_f3::LB => "lb",
                i_f3::LH => "lh",
                i_f3::LW => "lw",
                i_f3::LD => "ld",
                i_f3::LBU => "lbu",
                i_f3::LHU => "lhu",
                _ => "lwu",
            };
            format!("{mn} {rd}, {imm}({rs1})")
        }
        f_op::OP_LOAD_FP => {
            let mn = if f3 == f_f3::WIDTH_W { "flw" } else { "fld" };
            format!("{mn} {}, {imm}({rs1})", freg(rd))
        }
        i_op::OP_IMM => disasm_op_imm(i, "", i.shamt()),
        // *W shifts only have a 5-bit shift amount.
        i_op::OP_IMM_32 => disasm_op_imm(i, "w", i.shamt() & 0x1F),
        i_op::OP_JALR => format!("jalr {rd}, {imm}({rs1})"),
        i_op::OP_MISC_MEM => {
            if f3 == i_f3::FENCE_I {
                "fence.i".to_string()
            } else {
                "fence".to_string()
            }
        }
        sys_op::OP_SYSTEM => disasm_system(i),
        _ => raw_word(i.word()),
    }
}

/// Disassemble OP_IMM / OP_IMM_32 (immediate arithmetic).
fn disasm_op_imm(i: IType, suffix: &str, shamt: u32) -> String {
    let (rd, rs1) = (i.rd(), i.rs1());
    let mn = match i.funct3() {
        i_f3::ADD_SUB => "addi",
        i_f3::SLT => "slti",
        i_f3::SLTU => "sltiu",
        i_f3::XOR => "xori",
        i_f3::OR => "ori",
        i_f3::AND => "andi",
        i_f3::SLL => return format!("slli{suffix} {rd}, {rs1}, {shamt}"),
        _ => {
            let mn = if i.funct6() == i_f7::SHIFT_ARITH_6 { "srai" } else { "srli" };
            return format!("{mn}{suffix} {rd}, {rs1}, {shamt}");
        }
    };
    format!("{mn}{suffix} {rd}, {rs1}, {}", i.imm())
}

/// Disassemble system instructions.
fn disasm_system(i: IType) -> String {
    match i.word().raw() {
        sys_op::ECALL => return "ecall".to_string(),
        sys_op::EBREAK => return "ebreak".to_string(),
        sys_op::MRET => return "mret".to_string(),
        sys_op::SRET => return "sret".to_string(),
        sys_op::WFI => return "wfi".to_string(),
        _ => {}
    }

    let (rd, rs1, csr) = (i.rd(), i.rs1(), i.csr());
    if i.funct3() == sys_op::PRIV {
        return format!("sfence.vma {rs1}, {}", i.word().rs2());
    }

    // Immediate forms reuse the rs1 field as a 5-bit zero-extended value.
    let uimm = rs1.index();
    match i.funct3() {
        sys_op::CSRRW => format!("csrrw {rd}, {csr:#05x}, {rs1}"),
        sys_op::CSRRS => format!("csrrs {rd}, {csr:#05x}, {rs1}"),
        sys_op::CSRRC => format!("csrrc {rd}, {csr:#05x}, {rs1}"),
        sys_op::CSRRWI => format!("csrrwi {rd}, {csr:#05x}, {uimm}"),
        sys_op::CSRRSI => format!("csrrsi {rd}, {csr:#05x}, {uimm}"),
        _ => format!("csrrci {rd}, {csr:#05x}, {uimm}"),
    }
}

/// S-type: integer and FP stores.
fn render_s(s: SType) -> String {
    let (rs1, rs2, imm) = (s.rs1(), s.rs2(), s.imm());
    if s.opcode() == f_op::OP_STORE_FP {
        let mn = if s.funct3() == f_f3::WIDTH_W { "fsw" } else { "fsd" };
        return format!("{mn} {}, {imm}({rs1})", freg(rs2));
    }
    let mn = match s.funct3() {
        i_f3::SB => "sb",
        i_f3::SH => "sh",
        i_f3::SW => "sw",
        _ => "sd",
    };
    format!("{mn} {rs2}, {imm}({rs1})")
}

/// B-type: conditional branches.
fn render_b(b: BType) -> String {
    let mn = match b.funct3() {
        i_f3::BEQ => "beq",
        i_f3::BNE => "bne",
        i_f3::BLT => "blt",
        i_f3::BGE => "bge",
        i_f3::BLTU => "bltu",
        _ => "bgeu",
    };
    format!("{mn} {}, {}, {}", b.rs1(), b.rs2(), b.imm())
}

/// R4-type: fused multiply-add family.
fn render_r4(r4: R4Type) -> String {
    let mn = match r4.opcode() {
        f_op::OP_FMADD => "fmadd",
        f_op::OP_FMSUB => "fmsub",
        f_op::OP_FNMSUB => "fnmsub",
        _ => "fnmadd",
    };
    format!(
        "{mn}.{} {}, {}, {}, {}",
        precision(r4.funct2()),
        r4.fd(),
        r4.fs1(),
        r4.fs2(),
        r4.fs3()
    )
}

/// Precision suffix for a 2-bit FP format field.
const fn precision(fmt: u8) -> &'static str {
    if fmt == f_f7::FMT_D { "d" } else { "s" }
}

/// `fmv` spells single precision as `w`.
fn move_suffix(p: &str) -> &str {
    if p == "d" { "d" } else { "w" }
}

/// Integer operand of FCVT, selected by the rs2 field.
const fn int_variant(rs2: RegisterAlias) -> &'static str {
    match rs2.index() {
        0 => "w",
        1 => "wu",
        2 => "l",
        _ => "lu",
    }
}
