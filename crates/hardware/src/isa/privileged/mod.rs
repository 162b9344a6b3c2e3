//! System Instruction Definitions.
//!
//! Defines the SYSTEM opcode, the fixed encodings of ECALL/EBREAK/xRET/WFI, and
//! the CSR access function codes. Trap causes and CSR state are outside the
//! front end.

/// System instruction opcodes (ECALL, EBREAK, xRET, WFI, CSR access).
pub mod opcodes;
