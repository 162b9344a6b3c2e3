//! RISC-V System Opcodes.
//!
//! Defines the opcode and fixed encodings of SYSTEM instructions. The front end
//! decodes these words structurally; privileged semantics belong to execution logic.

/// System instruction opcode (0b1110011).
/// Used for CSR instructions, ECALL, EBREAK, xRET, WFI, etc.
pub const OP_SYSTEM: u8 = 0b1110011;

/// funct3 of the fixed-encoding system instructions (ECALL, EBREAK, xRET, WFI).
pub const PRIV: u8 = 0b000;

/// Environment Call (ECALL).
pub const ECALL: u32 = 0x0000_0073;

/// Environment Break (EBREAK).
pub const EBREAK: u32 = 0x0010_0073;

/// Machine Return (MRET).
pub const MRET: u32 = 0x3020_0073;

/// Supervisor Return (SRET).
pub const SRET: u32 = 0x1020_0073;

/// Wait for Interrupt (WFI).
pub const WFI: u32 = 0x1050_0073;

/// funct7 of Supervisor Memory-Management Fence (SFENCE.VMA).
pub const SFENCE_VMA_FUNCT7: u8 = 0b0001001;

/// Atomic Read/Write CSR (CSRRW).
pub const CSRRW: u8 = 0b001;
/// Atomic Read and Set Bits in CSR (CSRRS).
pub const CSRRS: u8 = 0b010;
/// Atomic Read and Clear Bits in CSR (CSRRC).
pub const CSRRC: u8 = 0b011;
/// Atomic Read/Write CSR Immediate (CSRRWI).
pub const CSRRWI: u8 = 0b101;
/// Atomic Read and Set Bits in CSR Immediate (CSRRSI).
pub const CSRRSI: u8 = 0b110;
/// Atomic Read and Clear Bits in CSR Immediate (CSRRCI).
pub const CSRRCI: u8 = 0b111;
