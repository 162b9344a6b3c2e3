//! Encoders for raw 32-bit instruction words.
//!
//! Each `*_type` function places its operands at the architectural bit positions
//! of one format. Operands are masked to their field width so out-of-range test
//! inputs wrap instead of corrupting neighbouring fields.

/// Encode an R-type instruction.
pub fn r_type(opcode: u8, rd: u32, funct3: u8, rs1: u32, rs2: u32, funct7: u8) -> u32 {
    (u32::from(funct7) & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (u32::from(funct3) & 0x7) << 12
        | (rd & 0x1F) << 7
        | (u32::from(opcode) & 0x7F)
}

/// Encode an I-type instruction.
pub fn i_type(opcode: u8, rd: u32, funct3: u8, rs1: u32, imm: i32) -> u32 {
    let imm_bits = (imm as u32) & 0xFFF;
    imm_bits << 20
        | (rs1 & 0x1F) << 15
        | (u32::from(funct3) & 0x7) << 12
        | (rd & 0x1F) << 7
        | (u32::from(opcode) & 0x7F)
}

/// Encode an S-type instruction.
pub fn s_type(opcode: u8, funct3: u8, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let hi = (v >> 5) & 0x7F;
    let lo = v & 0x1F;
    hi << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (u32::from(funct3) & 0x7) << 12
        | lo << 7
        | (u32::from(opcode) & 0x7F)
}

/// Encode a B-type instruction. Bit 0 of `imm` is dropped.
pub fn b_type(opcode: u8, funct3: u8, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let bit12 = (v >> 12) & 1;
    let bits10_5 = (v >> 5) & 0x3F;
    let bits4_1 = (v >> 1) & 0xF;
    let bit11 = (v >> 11) & 1;
    bit12 << 31
        | bits10_5 << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (u32::from(funct3) & 0x7) << 12
        | bits4_1 << 8
        | bit11 << 7
        | (u32::from(opcode) & 0x7F)
}

/// Encode a U-type instruction from the 20-bit upper immediate.
pub fn u_type(opcode: u8, rd: u32, imm20: u32) -> u32 {
    (imm20 & 0xFFFFF) << 12 | (rd & 0x1F) << 7 | (u32::from(opcode) & 0x7F)
}

/// Encode a J-type instruction. Bit 0 of `imm` is dropped.
pub fn j_type(opcode: u8, rd: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let bit20 = (v >> 20) & 1;
    let bits10_1 = (v >> 1) & 0x3FF;
    let bit11 = (v >> 11) & 1;
    let bits19_12 = (v >> 12) & 0xFF;
    bit20 << 31
        | bits10_1 << 21
        | bit11 << 20
        | bits19_12 << 12
        | (rd & 0x1F) << 7
        | (u32::from(opcode) & 0x7F)
}

/// Encode an R4-type (fused multiply-add) instruction.
pub fn r4_type(opcode: u8, rd: u32, funct3: u8, rs1: u32, rs2: u32, rs3: u32, fmt: u8) -> u32 {
    (rs3 & 0x1F) << 27
        | (u32::from(fmt) & 0x3) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (u32::from(funct3) & 0x7) << 12
        | (rd & 0x1F) << 7
        | (u32::from(opcode) & 0x7F)
}

/// Fluent builder for instruction words.
///
/// Collects every field any format might need, then lays them out with one of
/// the `build_*` methods.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstructionBuilder {
    opcode: u8,
    rd: u32,
    funct3: u8,
    rs1: u32,
    rs2: u32,
    funct7: u8,
    imm: i32,
}

impl InstructionBuilder {
    /// Starts from an all-zero word.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the opcode.
    pub fn opcode(mut self, op: u8) -> Self {
        self.opcode = op;
        self
    }

    /// Sets the destination register index.
    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    /// Sets the first source register index.
    pub fn rs1(mut self, rs1: u32) -> Self {
        self.rs1 = rs1;
        self
    }

    /// Sets the second source register index.
    pub fn rs2(mut self, rs2: u32) -> Self {
        self.rs2 = rs2;
        self
    }

    /// Sets funct3.
    pub fn funct3(mut self, funct3: u8) -> Self {
        self.funct3 = funct3;
        self
    }

    /// Sets funct7.
    pub fn funct7(mut self, funct7: u8) -> Self {
        self.funct7 = funct7;
        self
    }

    /// Sets the immediate.
    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    /// Lays the fields out as an R-type word.
    pub fn build_r(self) -> u32 {
        r_type(self.opcode, self.rd, self.funct3, self.rs1, self.rs2, self.funct7)
    }

    /// Lays the fields out as an I-type word.
    pub fn build_i(self) -> u32 {
        i_type(self.opcode, self.rd, self.funct3, self.rs1, self.imm)
    }

    /// Lays the fields out as an S-type word.
    pub fn build_s(self) -> u32 {
        s_type(self.opcode, self.funct3, self.rs1, self.rs2, self.imm)
    }

    /// Lays the fields out as a B-type word.
    pub fn build_b(self) -> u32 {
        b_type(self.opcode, self.funct3, self.rs1, self.rs2, self.imm)
    }

    /// Lays the fields out as a U-type word; `imm` holds the 20 upper bits.
    pub fn build_u(self) -> u32 {
        u_type(self.opcode, self.rd, self.imm as u32)
    }

    /// Lays the fields out as a J-type word.
    pub fn build_j(self) -> u32 {
        j_type(self.opcode, self.rd, self.imm)
    }
}
