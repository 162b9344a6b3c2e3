//! Opcode Dispatch Tests.
//!
//! Verifies that `decode` selects the right format for every supported opcode
//! family, rejects compressed words, unknown opcodes, and undefined funct
//! combinations, and honours the extension switches in `DecodeConfig`.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use rvdec_core::common::error::DecodeError;
use rvdec_core::config::DecodeConfig;
use rvdec_core::isa::abi::{FpRegister, RegisterAlias};
use rvdec_core::isa::decode::{Decoder, Instruction, decode, format_of};
use rvdec_core::isa::format::Format;
use rvdec_core::isa::instruction::{Fields, InstructionWord};
use rvdec_core::isa::privileged::opcodes as sys_op;
use rvdec_core::isa::rv64f::{funct3 as f_f3, funct7 as f_f7, opcodes as f_op};
use rvdec_core::isa::rv64i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};
use rvdec_core::isa::rv64m::{funct3 as m_f3, opcodes as m_op};

use crate::common::builder::instruction::{
    InstructionBuilder, b_type, i_type, j_type, r4_type, r_type, s_type, u_type,
};

/// Rounding mode field value selecting the dynamic rounding mode.
const RM_DYN: u8 = 0b111;

/// Installs a test subscriber so decode events are formatted during tests.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Builds an OP-FP funct7 from an operation and a format.
fn fp_funct7(funct5: u8, fmt: u8) -> u8 {
    funct5 << 2 | fmt
}

/// Asserts that `word` is rejected with `UnsupportedInstruction`.
fn assert_illegal(decoder: &Decoder, word: u32) {
    let w = InstructionWord::new(word);
    assert_eq!(
        decoder.decode(word),
        Err(DecodeError::UnsupportedInstruction {
            word,
            opcode: w.opcode(),
            funct3: w.funct3(),
            funct7: w.funct7(),
        }),
        "word {word:#010x} should be rejected"
    );
}

// ══════════════════════════════════════════════════════════
// 1. Format selection
// ══════════════════════════════════════════════════════════

/// Every supported opcode family decodes into its format's variant.
#[rstest]
#[case::add(r_type(i_op::OP_REG, 1, i_f3::ADD_SUB, 2, 3, i_f7::DEFAULT), Format::R)]
#[case::sraw(r_type(i_op::OP_REG_32, 1, i_f3::SRL_SRA, 2, 3, i_f7::SRA), Format::R)]
#[case::mulhu(r_type(i_op::OP_REG, 1, m_f3::MULHU, 2, 3, m_op::M_EXTENSION), Format::R)]
#[case::remuw(r_type(i_op::OP_REG_32, 1, m_f3::REMU, 2, 3, m_op::M_EXTENSION), Format::R)]
#[case::fadd_d(r_type(f_op::OP_FP, 1, RM_DYN, 2, 3, fp_funct7(f_f7::FADD, f_f7::FMT_D)), Format::R)]
#[case::feq_s(r_type(f_op::OP_FP, 1, f_f3::FEQ, 2, 3, fp_funct7(f_f7::FCMP, f_f7::FMT_S)), Format::R)]
#[case::addi(0x00A0_0513, Format::I)]
#[case::ld(i_type(i_op::OP_LOAD, 1, i_f3::LD, 2, 8), Format::I)]
#[case::lbu(i_type(i_op::OP_LOAD, 1, i_f3::LBU, 2, -1), Format::I)]
#[case::addiw(i_type(i_op::OP_IMM_32, 1, i_f3::ADD_SUB, 2, -5), Format::I)]
#[case::jalr(i_type(i_op::OP_JALR, 1, i_f3::JALR, 2, 0), Format::I)]
#[case::fence(0x0FF0_000F, Format::I)]
#[case::fence_i(0x0000_100F, Format::I)]
#[case::ecall(sys_op::ECALL, Format::I)]
#[case::mret(sys_op::MRET, Format::I)]
#[case::sfence_vma(0x1200_0073, Format::I)]
#[case::csrrw(i_type(sys_op::OP_SYSTEM, 1, sys_op::CSRRW, 2, 0x300), Format::I)]
#[case::flw(i_type(f_op::OP_LOAD_FP, 1, f_f3::WIDTH_W, 2, 4), Format::I)]
#[case::sd(s_type(i_op::OP_STORE, i_f3::SD, 2, 1, 8), Format::S)]
#[case::fsd(s_type(f_op::OP_STORE_FP, f_f3::WIDTH_D, 2, 1, -8), Format::S)]
#[case::bgeu(b_type(i_op::OP_BRANCH, i_f3::BGEU, 1, 2, -16), Format::B)]
#[case::lui(u_type(i_op::OP_LUI, 10, 0x12345), Format::U)]
#[case::auipc(u_type(i_op::OP_AUIPC, 10, 0xFFFFF), Format::U)]
#[case::jal(j_type(i_op::OP_JAL, 1, 2048), Format::J)]
#[case::fmadd_s(r4_type(f_op::OP_FMADD, 1, RM_DYN, 2, 3, 4, f_f7::FMT_S), Format::R4)]
#[case::fmsub_d(r4_type(f_op::OP_FMSUB, 1, 0, 2, 3, 4, f_f7::FMT_D), Format::R4)]
#[case::fnmsub_s(r4_type(f_op::OP_FNMSUB, 1, 0, 2, 3, 4, f_f7::FMT_S), Format::R4)]
#[case::fnmadd_d(r4_type(f_op::OP_FNMADD, 1, 0, 2, 3, 4, f_f7::FMT_D), Format::R4)]
fn selects_format(#[case] word: u32, #[case] format: Format) {
    init_tracing();
    let inst = decode(word).unwrap_or_else(|err| panic!("{word:#010x}: {err}"));
    assert_eq!(inst.format(), format);
    assert_eq!(inst.word().raw(), word);
    assert_eq!(format_of(inst.opcode()), Some(format));
}

/// Opcodes outside the supported families have no format.
#[test]
fn format_of_unknown_opcodes() {
    assert_eq!(format_of(0x7F), None);
    // AMO (A extension) is not decoded.
    assert_eq!(format_of(0b0101111), None);
    assert_eq!(format_of(i_op::OP_JAL), Some(Format::J));
}

/// Wrapping a word explicitly picks the requested variant.
#[test]
fn with_format_wraps_without_checking() {
    let word = InstructionWord::new(0xFFFF_FFFF);
    let inst = Instruction::with_format(Format::B, word);
    assert!(matches!(inst, Instruction::B(_)));
    assert_eq!(inst.word(), word);
}

// ══════════════════════════════════════════════════════════
// 2. Rejection
// ══════════════════════════════════════════════════════════

/// Low bits other than `0b11` mark a compressed word.
#[test]
fn rejects_compressed_words() {
    init_tracing();
    assert_eq!(decode(0x0000_4501_u32), Err(DecodeError::Compressed(0x4501)));
    // 0x12345678 has low bits 0b00.
    assert_eq!(decode(0x1234_5678_u32), Err(DecodeError::Compressed(0x5678)));
}

/// Unknown major opcodes are reported with the opcode.
#[test]
fn rejects_unknown_opcodes() {
    assert_eq!(
        decode(0xFFFF_FFFF_u32),
        Err(DecodeError::UnsupportedOpcode {
            word: 0xFFFF_FFFF,
            opcode: 0x7F,
        })
    );
    // lr.w a0, (a1)
    assert_eq!(
        decode(0x1005_A52F_u32),
        Err(DecodeError::UnsupportedOpcode {
            word: 0x1005_A52F,
            opcode: 0x2F,
        })
    );
}

/// `0x80000033` sets funct7 to `0b1000000`, which no OP instruction uses.
#[test]
fn rejects_0x80000033() {
    assert_eq!(
        decode(0x8000_0033_u32),
        Err(DecodeError::UnsupportedInstruction {
            word: 0x8000_0033,
            opcode: i_op::OP_REG,
            funct3: 0,
            funct7: 0b100_0000,
        })
    );
}

/// Known opcodes with undefined funct combinations are rejected.
#[rstest]
#[case::sll_with_sub(r_type(i_op::OP_REG, 1, i_f3::SLL, 2, 3, i_f7::SUB))]
#[case::op_funct7_2(r_type(i_op::OP_REG, 1, i_f3::ADD_SUB, 2, 3, 0b0000010))]
#[case::sltw(r_type(i_op::OP_REG_32, 1, i_f3::SLT, 2, 3, i_f7::DEFAULT))]
#[case::mulhw(r_type(i_op::OP_REG_32, 1, m_f3::MULH, 2, 3, m_op::M_EXTENSION))]
#[case::load_funct3_7(i_type(i_op::OP_LOAD, 1, 0b111, 2, 0))]
#[case::store_funct3_4(s_type(i_op::OP_STORE, 0b100, 2, 1, 0))]
#[case::branch_funct3_2(b_type(i_op::OP_BRANCH, 0b010, 1, 2, 8))]
#[case::jalr_funct3_1(i_type(i_op::OP_JALR, 1, 0b001, 2, 0))]
#[case::misc_mem_funct3_2(i_type(i_op::OP_MISC_MEM, 0, 0b010, 0, 0))]
#[case::srli_bad_funct6(i_type(i_op::OP_IMM, 1, i_f3::SRL_SRA, 2, 0b000001 << 6))]
#[case::slli_arith(i_type(i_op::OP_IMM, 1, i_f3::SLL, 2, 0b010000 << 6))]
#[case::slliw_wide_shamt(i_type(i_op::OP_IMM_32, 1, i_f3::SLL, 2, 32))]
#[case::system_funct3_4(i_type(sys_op::OP_SYSTEM, 1, 0b100, 2, 0))]
#[case::system_priv_unknown(i_type(sys_op::OP_SYSTEM, 0, sys_op::PRIV, 0, 0x7FF))]
#[case::flh(i_type(f_op::OP_LOAD_FP, 1, 0b001, 2, 0))]
#[case::fp_half_format(r_type(f_op::OP_FP, 1, 0, 2, 3, fp_funct7(f_f7::FADD, 0b10)))]
#[case::fp_unknown_funct5(r_type(f_op::OP_FP, 1, 0, 2, 3, fp_funct7(0b00110, f_f7::FMT_S)))]
#[case::fp_reserved_rounding(r_type(f_op::OP_FP, 1, 0b101, 2, 3, fp_funct7(f_f7::FMUL, f_f7::FMT_S)))]
#[case::fsqrt_nonzero_rs2(r_type(f_op::OP_FP, 1, 0, 2, 3, fp_funct7(f_f7::FSQRT, f_f7::FMT_D)))]
#[case::fcvt_w_selector_4(r_type(f_op::OP_FP, 1, RM_DYN, 2, 4, fp_funct7(f_f7::FCVT_INT_F, f_f7::FMT_S)))]
#[case::fcvt_from_int_selector_31(r_type(f_op::OP_FP, 1, RM_DYN, 2, 31, fp_funct7(f_f7::FCVT_F_INT, f_f7::FMT_D)))]
#[case::fmv_x_nonzero_rs2(r_type(f_op::OP_FP, 1, f_f3::FMV_X, 2, 1, fp_funct7(f_f7::FMV_X_FCLASS, f_f7::FMT_S)))]
#[case::fclass_nonzero_rs2(r_type(f_op::OP_FP, 1, f_f3::FCLASS, 2, 5, fp_funct7(f_f7::FMV_X_FCLASS, f_f7::FMT_D)))]
#[case::fmv_f_x_nonzero_rs2(r_type(f_op::OP_FP, 1, f_f3::FMV_X, 2, 3, fp_funct7(f_f7::FMV_F_X, f_f7::FMT_D)))]
#[case::fsqrt_s_nonzero_rs2(r_type(f_op::OP_FP, 1, RM_DYN, 2, 1, fp_funct7(f_f7::FSQRT, f_f7::FMT_S)))]
#[case::fcvt_same_format(r_type(f_op::OP_FP, 1, 0, 2, 0, fp_funct7(f_f7::FCVT_FMT, f_f7::FMT_S)))]
#[case::fmadd_half(r4_type(f_op::OP_FMADD, 1, 0, 2, 3, 4, 0b10))]
#[case::fmadd_reserved_rounding(r4_type(f_op::OP_FMADD, 1, 0b110, 2, 3, 4, f_f7::FMT_S))]
fn rejects_illegal_combinations(#[case] word: u32) {
    assert_illegal(&Decoder::default(), word);
}

// ══════════════════════════════════════════════════════════
// 3. Configuration
// ══════════════════════════════════════════════════════════

/// The default decoder enables every group.
#[test]
fn default_decoder_enables_everything() {
    assert_eq!(Decoder::default(), Decoder::new(&DecodeConfig::default()));
}

/// Without RV64, the 32-bit-operation opcodes and 64-bit memory accesses go away.
#[test]
fn rv32_rejects_rv64_only_words() {
    let decoder = Decoder::new(&DecodeConfig {
        rv64: false,
        ..DecodeConfig::default()
    });

    let addw = r_type(i_op::OP_REG_32, 1, i_f3::ADD_SUB, 2, 3, i_f7::DEFAULT);
    assert_eq!(
        decoder.decode(addw),
        Err(DecodeError::UnsupportedOpcode {
            word: addw,
            opcode: i_op::OP_REG_32,
        })
    );
    assert_illegal(&decoder, i_type(i_op::OP_LOAD, 1, i_f3::LD, 2, 0));
    assert_illegal(&decoder, i_type(i_op::OP_LOAD, 1, i_f3::LWU, 2, 0));
    assert_illegal(&decoder, s_type(i_op::OP_STORE, i_f3::SD, 2, 1, 0));
    // slli with a shift amount of 32 needs RV64.
    assert_illegal(&decoder, i_type(i_op::OP_IMM, 1, i_f3::SLL, 2, 32));

    let addiw = i_type(i_op::OP_IMM_32, 1, i_f3::ADD_SUB, 2, 5);
    assert_eq!(
        decoder.decode(addiw),
        Err(DecodeError::UnsupportedOpcode {
            word: addiw,
            opcode: i_op::OP_IMM_32,
        })
    );
    assert!(Decoder::default().decode(addiw).is_ok());

    let slli = i_type(i_op::OP_IMM, 1, i_f3::SLL, 2, 31);
    assert!(decoder.decode(slli).is_ok());
    assert!(Decoder::default().decode(i_type(i_op::OP_IMM, 1, i_f3::SLL, 2, 32)).is_ok());
}

/// FCVT between integer and FP names the integer type in `rs2`: `w`, `wu`,
/// `l`, `lu`. Only the 32-bit selectors exist without RV64.
#[rstest]
#[case::w(0, true)]
#[case::wu(1, true)]
#[case::l(2, false)]
#[case::lu(3, false)]
fn fcvt_integer_selectors(#[case] selector: u32, #[case] on_rv32: bool) {
    let rv32 = Decoder::new(&DecodeConfig {
        rv64: false,
        ..DecodeConfig::default()
    });

    for funct5 in [f_f7::FCVT_INT_F, f_f7::FCVT_F_INT] {
        for fmt in [f_f7::FMT_S, f_f7::FMT_D] {
            let word = r_type(f_op::OP_FP, 10, RM_DYN, 11, selector, fp_funct7(funct5, fmt));
            assert!(Decoder::default().decode(word).is_ok(), "{word:#010x} on rv64");
            if on_rv32 {
                assert!(rv32.decode(word).is_ok(), "{word:#010x} on rv32");
            } else {
                assert_illegal(&rv32, word);
            }
        }
    }
}

/// Without M, multiply/divide words are undefined.
#[test]
fn mul_div_switch() {
    let decoder = Decoder::new(&DecodeConfig {
        mul_div: false,
        ..DecodeConfig::default()
    });
    let mul = r_type(i_op::OP_REG, 1, m_f3::MUL, 2, 3, m_op::M_EXTENSION);
    assert_illegal(&decoder, mul);
    assert!(Decoder::default().decode(mul).is_ok());

    let add = r_type(i_op::OP_REG, 1, i_f3::ADD_SUB, 2, 3, i_f7::DEFAULT);
    assert!(decoder.decode(add).is_ok());
}

/// Without F/D, every FP opcode is unknown.
#[test]
fn float_switch() {
    let decoder = Decoder::new(&DecodeConfig {
        float: false,
        ..DecodeConfig::default()
    });
    for word in [
        i_type(f_op::OP_LOAD_FP, 1, f_f3::WIDTH_W, 2, 0),
        s_type(f_op::OP_STORE_FP, f_f3::WIDTH_D, 2, 1, 0),
        r_type(f_op::OP_FP, 1, 0, 2, 3, fp_funct7(f_f7::FADD, f_f7::FMT_S)),
        r4_type(f_op::OP_FNMADD, 1, 0, 2, 3, 4, f_f7::FMT_D),
    ] {
        assert!(
            matches!(decoder.decode(word), Err(DecodeError::UnsupportedOpcode { .. })),
            "{word:#010x} should be unknown without F/D"
        );
    }
}

// ══════════════════════════════════════════════════════════
// 4. Instruction accessors
// ══════════════════════════════════════════════════════════

/// R-type words expose all three registers and no immediate.
#[test]
fn r_instruction_accessors() {
    let inst = decode(r_type(i_op::OP_REG, 5, i_f3::XOR, 10, 15, i_f7::DEFAULT)).unwrap();
    assert_eq!(inst.opcode(), i_op::OP_REG);
    assert_eq!(inst.rd(), Some(RegisterAlias::T0));
    assert_eq!(inst.rs1(), Some(RegisterAlias::A0));
    assert_eq!(inst.rs2(), Some(RegisterAlias::A5));
    assert_eq!(inst.funct3(), Some(i_f3::XOR));
    assert_eq!(inst.imm(), None);
}

/// Stores have sources and an immediate but no destination.
#[test]
fn s_instruction_accessors() {
    let inst = decode(0xFEF4_2E23_u32).unwrap();
    assert_eq!(inst.rd(), None);
    assert_eq!(inst.rs1(), Some(RegisterAlias::S0));
    assert_eq!(inst.rs2(), Some(RegisterAlias::A5));
    assert_eq!(inst.imm(), Some(-4));
}

/// Immediates are widened to 64 bits with their sign.
#[test]
fn immediates_widen_with_sign() {
    let lui = decode(u_type(i_op::OP_LUI, 10, 0x80000)).unwrap();
    assert_eq!(lui.imm(), Some(-0x8000_0000));
    assert_eq!(lui.rs1(), None);

    let jal = decode(j_type(i_op::OP_JAL, 1, -1_048_576)).unwrap();
    assert_eq!(jal.imm(), Some(-1_048_576));

    let beq = decode(b_type(i_op::OP_BRANCH, i_f3::BEQ, 0, 0, 4094)).unwrap();
    assert_eq!(beq.imm(), Some(4094));
    assert_eq!(beq.rd(), None);
}

/// The flat summary of an I-type word lists exactly its fields.
#[test]
fn fields_of_i_type() {
    let fields = decode(0x00A0_0513_u32).unwrap().fields();
    assert_eq!(
        fields,
        Fields {
            raw: 0x00A0_0513,
            format: Format::I,
            opcode: i_op::OP_IMM,
            rd: Some(RegisterAlias::A0),
            rs1: Some(RegisterAlias::Zero),
            rs2: None,
            fd: None,
            fs: None,
            funct3: Some(i_f3::ADD_SUB),
            funct7: None,
            funct2: None,
            imm: Some(10),
        }
    );
}

/// R4 summaries carry FP registers instead of integer ones.
#[test]
fn fields_of_r4_type() {
    let fields = decode(r4_type(f_op::OP_FMSUB, 10, RM_DYN, 11, 12, 13, f_f7::FMT_D))
        .unwrap()
        .fields();
    assert_eq!(fields.format, Format::R4);
    assert_eq!(fields.rd, None);
    assert_eq!(fields.fd, Some(FpRegister::from_field(10)));
    assert_eq!(
        fields.fs,
        Some([
            FpRegister::from_field(11),
            FpRegister::from_field(12),
            FpRegister::from_field(13),
        ])
    );
    assert_eq!(fields.funct2, Some(f_f7::FMT_D));
    assert_eq!(fields.imm, None);
}

/// OP-FP summaries report the raw register fields under integer names, and
/// leave the R4 operand slots empty.
#[test]
fn fields_of_op_fp_keep_raw_register_fields() {
    let fadd = decode(0x0000_0053_u32).unwrap();
    assert_eq!(fadd.to_string(), "fadd.s ft0, ft0, ft0");

    let fields = fadd.fields();
    assert_eq!(fields.format, Format::R);
    assert_eq!(fields.rd, Some(RegisterAlias::Zero));
    assert_eq!(fields.rs1, Some(RegisterAlias::Zero));
    assert_eq!(fields.rs2, Some(RegisterAlias::Zero));
    assert_eq!(fields.fd, None);
    assert_eq!(fields.fs, None);
    assert_eq!(fields.funct7, Some(fp_funct7(f_f7::FADD, f_f7::FMT_S)));

    let value = serde_json::to_value(fields).unwrap();
    assert_eq!(value["rd"], json!("zero"));
    assert!(value.get("fd").is_none());
}

/// Summaries serialise with ABI names and omit absent fields.
#[test]
fn fields_serialise_to_json() {
    let value = serde_json::to_value(decode(0x00A0_0513_u32).unwrap().fields()).unwrap();
    assert_eq!(
        value,
        json!({
            "raw": 0x00A0_0513,
            "format": "I",
            "opcode": 0x13,
            "rd": "a0",
            "rs1": "zero",
            "funct3": 0,
            "imm": 10,
        })
    );

    let r4 = decode(r4_type(f_op::OP_FMADD, 10, 0, 11, 12, 13, f_f7::FMT_S)).unwrap();
    let value = serde_json::to_value(r4.fields()).unwrap();
    assert_eq!(value["fd"], json!("fa0"));
    assert_eq!(value["fs"], json!(["fa1", "fa2", "fa3"]));
}

/// Words laid out by the fluent builder decode back to the fields it was given.
#[test]
fn builder_words_decode_to_their_fields() {
    let base = InstructionBuilder::new().rd(10).rs1(11).rs2(12).imm(-20);

    let lw = decode(base.opcode(i_op::OP_LOAD).funct3(i_f3::LW).build_i()).unwrap();
    assert_eq!((lw.format(), lw.rd(), lw.imm()), (Format::I, Some(RegisterAlias::A0), Some(-20)));

    let sh = decode(base.opcode(i_op::OP_STORE).funct3(i_f3::SH).build_s()).unwrap();
    assert_eq!((sh.format(), sh.rs2(), sh.imm()), (Format::S, Some(RegisterAlias::A2), Some(-20)));

    let blt = decode(base.opcode(i_op::OP_BRANCH).funct3(i_f3::BLT).build_b()).unwrap();
    assert_eq!((blt.format(), blt.rs1(), blt.imm()), (Format::B, Some(RegisterAlias::A1), Some(-20)));

    let jal = decode(base.opcode(i_op::OP_JAL).build_j()).unwrap();
    assert_eq!((jal.format(), jal.rd(), jal.imm()), (Format::J, Some(RegisterAlias::A0), Some(-20)));

    let lui = decode(base.opcode(i_op::OP_LUI).imm(0x1).build_u()).unwrap();
    assert_eq!((lui.format(), lui.imm()), (Format::U, Some(0x1000)));
}

/// Decoders are plain values that can be shared across threads.
#[test]
fn decoder_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Decoder>();
    assert_send_sync::<Instruction>();
    assert_send_sync::<InstructionWord>();
}
