//! # ISA Unit Tests
//!
//! This module contains unit tests for the Instruction Set Architecture (ISA) implementation.
//! It covers field extraction, format decoders, dispatch, disassembly, and ABI names.




/// Opcode dispatch tests.
///
/// This module verifies format selection per opcode family, rejection of
/// illegal funct combinations and compressed words, and configuration switches.
pub mod dispatch;
