//! Physical System Memory.
//!
//! This module implements the flat store the front end fetches from. It provides:
//! 1. **Storage:** A zero-initialised byte image mapped at a configurable base address.
//! 2. **Checking:** Every access must lie entirely inside `[base, base + size)`, and
//!    (by default) be naturally aligned.
//! 3. **Loading:** Byte-image copies for the loader that populates memory before fetch.

use tracing::debug;

use crate::common::data::AccessType;
use crate::common::error::MemoryError;
use crate::config::MemoryConfig;
use crate::soc::traits::{AddressableMemory, Width};

/// Largest access width in bytes.
const MAX_ACCESS_BYTES: usize = 8;

/// System Memory structure.
///
/// Data is stored little-endian. A rejected access never modifies the image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    /// Backing bytes; index 0 corresponds to `base`.
    data: Vec<u8>,
    /// The base address where this memory is mapped.
    base: u64,
    /// Reject accesses whose address is not a multiple of their width.
    enforce_alignment: bool,
}

impl Memory {
    /// Creates a zero-filled memory with alignment enforcement enabled.
    ///
    /// # Arguments
    ///
    /// * `base` - Starting address.
    /// * `size` - Size in bytes.
    pub fn new(base: u64, size: usize) -> Self {
        Self {
            data: vec![0; size],
            base,
            enforce_alignment: true,
        }
    }

    /// Creates a memory laid out as described by `config`.
    pub fn from_config(config: &MemoryConfig) -> Self {
        Self::new(config.base, config.size).with_alignment(config.enforce_alignment)
    }

    /// Sets whether misaligned accesses fault.
    #[must_use]
    pub fn with_alignment(mut self, enforce: bool) -> Self {
        self.enforce_alignment = enforce;
        self
    }

    /// Returns the base address.
    pub const fn base(&self) -> u64 {
        self.base
    }

    /// Returns the size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if misaligned accesses fault.
    pub const fn enforces_alignment(&self) -> bool {
        self.enforce_alignment
    }

    /// Returns the whole memory image.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Copies a byte image into memory at an absolute address.
    ///
    /// Used for loading programs and fixtures before fetch. Alignment is not
    /// required.
    ///
    /// # Arguments
    ///
    /// * `addr` - Absolute address of the first byte.
    /// * `bytes` - The data to copy.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::AccessFault`] if any byte falls outside the mapped
    /// region; nothing is copied in that case.
    pub fn load(&mut self, addr: u64, bytes: &[u8]) -> Result<(), MemoryError> {
        let start = self.offset(addr, bytes.len(), AccessType::Write)?;
        self.data[start..start + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Validates an access and converts its address into an index into `data`.
    fn check(&self, addr: u64, width: Width, access: AccessType) -> Result<usize, MemoryError> {
        let size = width.bytes();
        if self.enforce_alignment && addr % size as u64 != 0 {
            debug!(%access, addr, size, "misaligned memory access");
            return Err(MemoryError::Misaligned { access, addr, size });
        }
        self.offset(addr, size, access)
    }

    /// Bounds check; overflow anywhere in the computation is a fault.
    fn offset(&self, addr: u64, size: usize, access: AccessType) -> Result<usize, MemoryError> {
        let start = addr
            .checked_sub(self.base)
            .and_then(|off| usize::try_from(off).ok());
        match start {
            Some(start) if start.checked_add(size).is_some_and(|end| end <= self.data.len()) => {
                Ok(start)
            }
            _ => {
                debug!(%access, addr, size, "memory access fault");
                Err(MemoryError::AccessFault { access, addr, size })
            }
        }
    }
}

impl AddressableMemory for Memory {
    fn read(&mut self, addr: u64, width: Width) -> Result<u64, MemoryError> {
        let start = self.check(addr, width, AccessType::Read)?;
        let n = width.bytes();
        let mut buf = [0_u8; MAX_ACCESS_BYTES];
        buf[..n].copy_from_slice(&self.data[start..start + n]);
        Ok(u64::from_le_bytes(buf))
    }

    fn write(&mut self, addr: u64, width: Width, val: u64) -> Result<(), MemoryError> {
        let start = self.check(addr, width, AccessType::Write)?;
        let n = width.bytes();
        self.data[start..start + n].copy_from_slice(&val.to_le_bytes()[..n]);
        Ok(())
    }
}
