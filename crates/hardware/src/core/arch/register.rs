//! Single Architectural Register Cell.
//!
//! A `Register` is the storage unit shared by the integer and floating-point
//! register files. It holds one 64-bit value and enforces no policy of its own;
//! hardwired behaviour such as `x0` reading as zero belongs to the owning file.

/// A single 64-bit register with read/write access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Register {
    value: u64,
}

impl Register {
    /// Creates a register holding zero.
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Returns the stored value.
    #[inline(always)]
    pub const fn read(&self) -> u64 {
        self.value
    }

    /// Replaces the stored value.
    #[inline(always)]
    pub const fn write(&mut self, value: u64) {
        self.value = value;
    }
}
