//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used by the addressable store.
//! These types are used for the following:
//! 1. **Fault Reporting:** Tagging access faults with the operation that caused them.
//! 2. **Fetch Semantics:** Distinguishing instruction fetches from data loads.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// so that the execution layer can map a fault onto the correct trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Occurs when the front end reads an instruction word at the program counter.
    Fetch,

    /// Data read access.
    ///
    /// Occurs during load instructions when reading data from memory into registers.
    Read,

    /// Data write access.
    ///
    /// Occurs during store instructions when writing data from registers to memory.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Read => "read",
            Self::Write => "write",
        };
        f.write_str(name)
    }
}
