//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, which acts as a unified interface for
//! accessing both General Purpose Registers (GPRs) and Floating-Point Registers (FPRs).
//! It provides:
//! 1. **Unified Storage:** Combined storage for all RISC-V architectural registers.
//! 2. **Typed Addressing:** Registers are addressed by [`RegisterAlias`] and [`FpRegister`],
//!    so every access is in range by construction.
//! 3. **Observability:** Debugging utilities for dumping register state during simulation.

use crate::core::arch::fpr::Fpr;
use crate::core::arch::gpr::Gpr;
use crate::isa::abi::{FpRegister, RegisterAlias};

/// Unified register file containing both general-purpose and floating-point registers.
///
/// This structure provides a single interface for accessing all processor registers,
/// abstracting the underlying GPR and FPR implementations. Register access cannot
/// fail: both alias types only represent indices 0-31.
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    gpr: Gpr,
    fpr: Fpr,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            gpr: Gpr::new(),
            fpr: Fpr::new(),
        }
    }

    /// Reads a value from a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `reg` - Register to read. `zero` always returns 0.
    ///
    /// # Returns
    ///
    /// The 64-bit value stored in the specified register.
    pub fn read(&self, reg: RegisterAlias) -> u64 {
        self.gpr.read(reg)
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `reg` - Register to write. Writes to `zero` are ignored.
    /// * `val` - The 64-bit value to write.
    pub fn write(&mut self, reg: RegisterAlias, val: u64) {
        self.gpr.write(reg, val);
    }

    /// Reads the raw bits of a floating-point register.
    pub fn read_f(&self, reg: FpRegister) -> u64 {
        self.fpr.read(reg)
    }

    /// Writes raw bits into a floating-point register.
    pub fn write_f(&mut self, reg: FpRegister, val: u64) {
        self.fpr.write(reg, val);
    }

    /// Clears every integer and floating-point register.
    pub fn reset(&mut self) {
        self.gpr.reset();
        self.fpr.reset();
    }

    /// Dumps the contents of all general-purpose registers through `tracing`.
    ///
    /// Useful for debugging and tracing register state during simulation.
    pub fn dump(&self) {
        self.gpr.dump();
    }
}
