//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the RISC-V architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`) as [`Register`] cells.
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use tracing::info;

use crate::common::constants::NUM_REGISTERS;
use crate::core::arch::register::Register;
use crate::isa::abi::RegisterAlias;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations. Register `x0`
/// is hardwired to zero: writes to it are accepted and discarded.
#[derive(Clone, Debug)]
pub struct Gpr {
    regs: [Register; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [Register::new(); NUM_REGISTERS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `reg` - Register to read.
    ///
    /// # Returns
    ///
    /// The 64-bit value stored in the specified register. Register `x0` always returns 0.
    pub fn read(&self, reg: RegisterAlias) -> u64 {
        if reg == RegisterAlias::Zero {
            0
        } else {
            self.regs[slot(reg)].read()
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `x0` are silently discarded.
    ///
    /// # Arguments
    ///
    /// * `reg` - Register to write.
    /// * `val` - The 64-bit value to write.
    pub fn write(&mut self, reg: RegisterAlias, val: u64) {
        if reg != RegisterAlias::Zero {
            self.regs[slot(reg)].write(val);
        }
    }

    /// Clears every register back to zero.
    pub fn reset(&mut self) {
        self.regs = [Register::new(); NUM_REGISTERS];
    }

    /// Dumps the contents of all general-purpose registers as `tracing` events.
    ///
    /// Registers are emitted in pairs with their ABI names and hexadecimal values.
    pub fn dump(&self) {
        for pair in RegisterAlias::ALL.chunks_exact(2) {
            let (lo, hi) = (pair[0], pair[1]);
            info!(
                "x{:<2} {:>4}={:#018x}  x{:<2} {:>4}={:#018x}",
                lo.index(),
                lo.name(),
                self.read(lo),
                hi.index(),
                hi.name(),
                self.read(hi)
            );
        }
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts an alias into a storage slot, asserting the architectural range.
#[inline(always)]
fn slot(reg: RegisterAlias) -> usize {
    let idx = reg.index();
    debug_assert!(idx < NUM_REGISTERS, "register alias {idx} outside x0-x31");
    idx
}
