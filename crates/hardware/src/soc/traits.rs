//! Addressable memory trait.
//!
//! This module defines the `AddressableMemory` trait implemented by every store the
//! front end can fetch from. It provides:
//! 1. **Access:** Little-endian reads and writes of 1, 2, 4, or 8 bytes at absolute addresses.
//! 2. **Fetch:** A provided `fetch` that reads one 32-bit instruction word at the program counter.
//! 3. **Widths:** The [`Width`] enum naming the supported access sizes.
//!
//! Which width a load or store instruction uses is the consumer's decision; nothing
//! here maps funct3 onto a width.

use crate::common::constants::INSTRUCTION_SIZE_32;
use crate::common::data::AccessType;
use crate::common::error::MemoryError;
use crate::isa::instruction::InstructionWord;

/// Size of a single memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// 1 byte.
    Byte,
    /// 2 bytes.
    Half,
    /// 4 bytes.
    Word,
    /// 8 bytes.
    Double,
}

impl Width {
    /// Returns the number of bytes covered by this width.
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
            Self::Double => 8,
        }
    }

    /// Maps a byte count onto a width, or `None` for unsupported sizes.
    pub const fn from_bytes(bytes: usize) -> Option<Self> {
        match bytes {
            1 => Some(Self::Byte),
            2 => Some(Self::Half),
            4 => Some(Self::Word),
            8 => Some(Self::Double),
            _ => None,
        }
    }
}

/// Byte-addressable, little-endian store.
///
/// Implementors report faults through [`MemoryError`] and never panic on a bad
/// address. Values narrower than 64 bits are zero-extended on read and truncated
/// on write.
pub trait AddressableMemory {
    /// Reads `width` bytes at `addr` as a zero-extended little-endian value.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError`] tagged [`AccessType::Read`] if the access is out of
    /// range or violates the alignment policy.
    fn read(&mut self, addr: u64, width: Width) -> Result<u64, MemoryError>;

    /// Writes the low `width` bytes of `val` at `addr` in little-endian order.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError`] tagged [`AccessType::Write`] if the access is out of
    /// range or violates the alignment policy. A failed write changes nothing.
    fn write(&mut self, addr: u64, width: Width, val: u64) -> Result<(), MemoryError>;

    /// Fetches the 32-bit instruction word at `pc`.
    ///
    /// The default implementation requires `pc` to be 4-byte aligned and reads
    /// through [`AddressableMemory::read`], retagging faults as fetches.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError`] tagged [`AccessType::Fetch`].
    fn fetch(&mut self, pc: u64) -> Result<InstructionWord, MemoryError> {
        let size = Width::Word.bytes();
        if pc % INSTRUCTION_SIZE_32 != 0 {
            return Err(MemoryError::Misaligned {
                access: AccessType::Fetch,
                addr: pc,
                size,
            });
        }
        let raw = self
            .read(pc, Width::Word)
            .map_err(|err| err.with_access(AccessType::Fetch))?;
        Ok(InstructionWord::new(raw as u32))
    }
}
