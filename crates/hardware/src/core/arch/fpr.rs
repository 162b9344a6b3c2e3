//! RISC-V Floating-Point Register File.
//!
//! This module implements the Floating-Point Register (FPR) file for the RISC-V architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 32 floating-point registers (`f0`-`f31`) as raw 64-bit cells.
//! 2. **Access Control:** Provides raw-bit reads and writes addressed by [`FpRegister`].
//!
//! Unlike the integer file there is no hardwired register; `f0` is an ordinary register.

use crate::common::constants::NUM_FP_REGISTERS;
use crate::core::arch::register::Register;
use crate::isa::abi::FpRegister;

/// Floating-Point Register file.
///
/// Contains 32 floating-point registers. Values are stored as raw IEEE 754 bit
/// patterns; interpretation (single, double, NaN-boxing) belongs to the FPU.
#[derive(Clone, Debug)]
pub struct Fpr {
    fregs: [Register; NUM_FP_REGISTERS],
}

impl Fpr {
    /// Creates a new floating-point register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            fregs: [Register::new(); NUM_FP_REGISTERS],
        }
    }

    /// Reads a floating-point register value as raw bits.
    pub fn read(&self, reg: FpRegister) -> u64 {
        self.fregs[reg.index()].read()
    }

    /// Writes a floating-point register value from raw bits.
    pub fn write(&mut self, reg: FpRegister, val: u64) {
        self.fregs[reg.index()].write(val);
    }

    /// Clears every register back to zero.
    pub fn reset(&mut self) {
        self.fregs = [Register::new(); NUM_FP_REGISTERS];
    }
}

impl Default for Fpr {
    fn default() -> Self {
        Self::new()
    }
}
